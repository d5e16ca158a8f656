pub const HOME_STYLES: &str = r#"
/* Portfolio page styles */

.page {
  padding-top: var(--header-height);
}

.page section {
  padding: var(--space-20) 0;
}

.section-title {
  font-size: 3rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-subtitle {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-10);
  padding-bottom: var(--space-2);
  border-bottom: 1px solid var(--border);
}

/* Hero */
.hero {
  position: relative;
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  text-align: center;
}

.hero-shapes .shape {
  position: absolute;
  opacity: 0.1;
}

.shape-square {
  top: 25%;
  left: 25%;
  width: 16rem;
  height: 16rem;
  background-color: var(--red);
  animation: spin 120s linear infinite;
}

.shape-circle {
  bottom: 33%;
  right: 25%;
  width: 24rem;
  height: 24rem;
  border-radius: var(--radius-full);
  background-color: var(--blue);
  animation: pulse 15s ease-in-out infinite;
}

.shape-diamond {
  top: 66%;
  left: 33%;
  width: 12rem;
  height: 12rem;
  background-color: var(--yellow);
  transform: rotate(45deg);
  animation: drift 20s ease-in-out infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes pulse {
  50% { transform: scale(1.2); }
}

@keyframes drift {
  50% { transform: translate(50px, -50px) rotate(45deg); }
}

.hero-content {
  position: relative;
  z-index: 10;
}

.hero-mark {
  width: 6rem;
  height: 6rem;
  margin: 0 auto var(--space-8);
  background-color: var(--text-primary);
}

.hero-title {
  font-size: clamp(3.5rem, 10vw, 6rem);
  font-weight: 700;
  letter-spacing: -0.04em;
  text-transform: uppercase;
  margin-bottom: var(--space-6);
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-tertiary);
  max-width: 42rem;
  margin: 0 auto var(--space-10);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

/* About */
.about-content {
  max-width: 56rem;
  margin: 0 auto;
}

.about-intro {
  max-width: 42rem;
  margin: 0 auto var(--space-20);
  font-size: 1.25rem;
  line-height: 1.75;
  text-align: center;
  color: var(--text-secondary);
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: var(--space-12);
}

.timeline-entry {
  position: relative;
  padding-left: var(--space-10);
  border-left: 1px solid var(--border);
}

.timeline-entry::before {
  content: "";
  position: absolute;
  left: -9px;
  top: 0;
  width: 16px;
  height: 16px;
  border-radius: var(--radius-full);
  background-color: var(--text-primary);
}

.timeline-period {
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--accent);
  margin-bottom: var(--space-2);
}

.timeline-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
}

.timeline-desc {
  color: var(--text-tertiary);
}

.skills {
  margin-top: var(--space-20);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
}

.skill-name {
  font-size: 1.125rem;
  font-weight: 500;
}

.skill-level {
  color: var(--text-tertiary);
}

.skill-bar {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--bar-track);
  overflow: hidden;
}

.skill-fill {
  height: 100%;
  background-color: var(--accent);
}

/* Portfolio */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-8);
}

.project-card {
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--surface);
  transition: box-shadow var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-lg);
}

.project-card img {
  width: 100%;
  height: 14rem;
  object-fit: cover;
}

.project-body {
  padding: var(--space-6);
}

.project-title {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--accent);
  margin-bottom: var(--space-3);
}

.project-summary {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.chips {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.chip {
  font-size: 0.75rem;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--chip-background);
  color: var(--chip-text);
}

.project-actions {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

/* Project detail */
.detail {
  max-width: 56rem;
  margin: 0 auto;
  padding: var(--space-10) var(--space-4) var(--space-20);
}

.detail-toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-10);
}

.detail-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-8);
}

.detail-image {
  width: 100%;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-10);
}

.detail-description {
  font-size: 1.125rem;
  line-height: 1.75;
  color: var(--text-secondary);
  margin-bottom: var(--space-10);
}

.not-found {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  text-align: center;
}

.not-found h1 {
  font-size: 3rem;
  font-weight: 700;
}

.not-found p {
  font-size: 1.25rem;
  margin-bottom: var(--space-4);
}
"#;
