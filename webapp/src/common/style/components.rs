pub const BASE_COMPONENTS: &str = r#"
/* Layout */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: 1px solid transparent;
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  background: none;
  color: inherit;
  transition: background-color var(--transition-fast) var(--easing-standard),
  color var(--transition-fast) var(--easing-standard);
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  font-size: 1.125rem;
}

.btn-primary {
  background-color: var(--text-primary);
  color: var(--background);
}

.btn-primary:hover {
  background-color: var(--accent);
  text-decoration: none;
}

.btn-secondary {
  border-color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--surface);
  text-decoration: none;
}

.btn-ghost:hover {
  background-color: var(--surface);
}

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: var(--header-background);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  color: var(--text-primary);
}

.logo:hover {
  text-decoration: none;
}

.logo-mark {
  width: 32px;
  height: 32px;
  margin-right: var(--space-3);
  background-color: var(--text-primary);
}

.logo-name {
  font-size: 1.25rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--accent);
}

.theme-toggle {
  margin-left: var(--space-6);
  padding: var(--space-1) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background-color: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

.theme-toggle.compact {
  margin-left: 0;
  padding: var(--space-1) var(--space-2);
}

.nav-mobile {
  display: none;
  align-items: center;
  gap: var(--space-2);
}

.menu-button {
  padding: var(--space-2);
  background: none;
  border: none;
  cursor: pointer;
}

.menu-button span {
  display: block;
  width: 24px;
  height: 2px;
  margin-bottom: 6px;
  background-color: var(--text-primary);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.menu-button span:last-child {
  margin-bottom: 0;
}

.mobile-menu {
  position: fixed;
  top: var(--header-height);
  left: 0;
  right: 0;
  z-index: 40;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-4) var(--space-6);
  background-color: var(--header-background);
  border-bottom: 1px solid var(--border);
}

.mobile-menu .nav-link {
  text-align: left;
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .nav-mobile {
    display: flex;
  }
}

/* Footer */
.site-footer {
  background-color: var(--surface);
  padding: var(--space-10) 0;
  margin-top: var(--space-20);
  text-align: center;
}

.copyright {
  color: var(--text-tertiary);
  margin-bottom: var(--space-6);
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: var(--space-6);
}

.footer-links a {
  color: var(--text-tertiary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.footer-links a:hover {
  color: var(--text-primary);
}
"#;
