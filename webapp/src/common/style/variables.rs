pub const CSS_VARIABLES: &str = r#"
:root {
  /* Bauhaus primaries */
  --red: #E63946;
  --blue: #1D4ED8;
  --yellow: #FACC15;
  --yellow-dark: #CA8A04;

  /* Neutrals */
  --neutral-50: #FAFAFA;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;
  --neutral-950: #000000;

  /* Light palette */
  --background: #FFFFFF;
  --surface: var(--neutral-100);
  --surface-raised: #FFFFFF;
  --header-background: rgba(255, 255, 255, 0.8);
  --text-primary: var(--neutral-950);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --border: var(--neutral-300);
  --accent: var(--yellow-dark);
  --chip-background: var(--neutral-200);
  --chip-text: var(--neutral-700);
  --bar-track: var(--neutral-200);

  /* Layout */
  --header-height: 80px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

:root[data-theme="dark"] {
  --background: var(--neutral-950);
  --surface: var(--neutral-900);
  --surface-raised: var(--neutral-800);
  --header-background: rgba(0, 0, 0, 0.8);
  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);
  --border: var(--neutral-800);
  --accent: var(--yellow);
  --chip-background: var(--neutral-800);
  --chip-text: var(--neutral-300);
  --bar-track: var(--neutral-800);
  color-scheme: dark;
}"#;
