//! Global CSS styles for CG Viz Studio.
//!
//! Light values live on `:root`; `.dark` (set on both `<html>` and the page
//! root) overrides them. Motion is CSS only.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand */
  --purple-400: #c084fc;
  --purple-500: #a855f7;
  --purple-600: #9333ea;
  --purple-700: #7e22ce;
  --purple-100: #f3e8ff;
  --indigo-600: #4f46e5;
  --pink-100: #fce7f3;
  --pink-500: #ec4899;
  --pink-600: #db2777;
  --yellow-500: #eab308;

  /* Surfaces */
  --bg: #ffffff;
  --surface: #ffffff;
  --surface-muted: #f9fafb;
  --border: #e5e7eb;
  --text: #111827;
  --text-muted: #4b5563;
  --header-from: var(--purple-600);
  --header-to: var(--indigo-600);
  --viewer-from: var(--purple-100);
  --viewer-to: var(--pink-100);
  --viewer-text: var(--purple-700);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

.dark {
  --bg: #111827;
  --surface: #1f2937;
  --surface-muted: #374151;
  --border: #374151;
  --text: #f9fafb;
  --text-muted: #d1d5db;
  --header-from: #581c87;
  --header-to: #312e81;
  --viewer-from: #581c87;
  --viewer-to: #831843;
  --viewer-text: #d8b4fe;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text);
  line-height: 1.5;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
}

.gradient-text {
  background: linear-gradient(to right, var(--purple-400), var(--pink-600));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.muted-text {
  color: var(--text-muted);
}

/* === Page Shell === */
.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
}

.page-main {
  flex-grow: 1;
  padding: 2rem 1rem;
}

/* === Header === */
.site-header {
  background: linear-gradient(to right, var(--header-from), var(--header-to));
  color: #ffffff;
  padding: 1rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  animation: slide-down 600ms cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

.header-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  font-size: 1.875rem;
  font-weight: 700;
  background: linear-gradient(to right, var(--pink-500), var(--yellow-500));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  transition: transform var(--transition-fast);
}

.brand:hover {
  transform: scale(1.1);
}

.header-nav {
  display: flex;
  align-items: center;
  gap: 1rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: 1px solid transparent;
  border-radius: 0.375rem;
  padding: 0.5rem 1rem;
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast), transform var(--transition-fast);
}

.btn-block {
  width: 100%;
}

.btn-primary {
  background: var(--purple-600);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--purple-700);
}

.btn-ghost {
  background: transparent;
  color: inherit;
}

.btn-ghost:hover {
  background: rgba(255, 255, 255, 0.2);
}

.btn-outline {
  background: #ffffff;
  color: var(--purple-600);
  border-color: var(--border);
}

.btn-outline:hover {
  background: var(--purple-100);
  color: var(--purple-700);
}

.btn-gradient {
  background: linear-gradient(to right, var(--purple-500), var(--pink-500));
  color: #ffffff;
  font-size: 1.125rem;
  font-weight: 700;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.btn-gradient:hover {
  background: linear-gradient(to right, var(--purple-600), var(--pink-600));
  transform: scale(1.05);
}

.btn-link {
  background: transparent;
  color: #d8b4fe;
  padding: 0.25rem 0.5rem;
}

.btn-link:hover {
  color: #f3e8ff;
  text-decoration: underline;
}

.icon-btn {
  padding: 0.25rem;
}

/* === Switch === */
.switch {
  position: relative;
  width: 2.75rem;
  height: 1.5rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.3);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.switch.checked {
  background: var(--purple-400);
}

.switch-thumb {
  position: absolute;
  top: 0.125rem;
  left: 0.125rem;
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 9999px;
  background: #ffffff;
  transition: transform var(--transition-fast);
}

.switch.checked .switch-thumb {
  transform: translateX(1.25rem);
}

/* === Hero === */
.hero {
  text-align: center;
  margin-bottom: 3rem;
  animation: fade-up 800ms ease both;
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  margin-bottom: 1rem;
}

.hero-tagline {
  font-size: 1.25rem;
  margin-bottom: 1.5rem;
  color: var(--text-muted);
}

/* === Viewer Placeholder === */
.viewer-placeholder {
  height: 24rem;
  margin-bottom: 3rem;
  border-radius: 1rem;
  background: linear-gradient(to bottom right, var(--viewer-from), var(--viewer-to));
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  transition: transform var(--transition-normal);
}

.viewer-placeholder:hover {
  transform: scale(1.02);
}

.viewer-pulse {
  text-align: center;
  animation: wobble 5s ease-in-out infinite;
}

.viewer-icon {
  display: block;
  margin: 0 auto 1rem;
  color: var(--purple-500);
}

.viewer-label {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--viewer-text);
}

/* === Services === */
.services {
  margin-bottom: 3rem;
}

.services-heading {
  font-size: 1.875rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 2rem;
}

.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 2rem;
}

.service-card-wrapper {
  animation: fade-in 500ms ease both;
  transition: transform var(--transition-fast);
}

.service-card-wrapper:hover {
  transform: scale(1.05) rotate(1deg);
}

.service-card-wrapper:active {
  transform: scale(0.95);
}

.service-card-header {
  background: linear-gradient(to right, var(--purple-500), var(--pink-500));
  color: #ffffff;
}

.service-card-header .card-title {
  font-size: 1.5rem;
  font-weight: 800;
}

.service-card-footer {
  background: var(--surface-muted);
}

/* === Cards === */
.card {
  background: var(--surface);
  color: var(--text);
  border-radius: 0.5rem;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  overflow: hidden;
}

.card-header,
.card-content,
.card-footer {
  padding: 1.5rem;
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.card-description {
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-top: 0.25rem;
}

/* === Forms === */
.form-stack {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
}

.input-field {
  font: inherit;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  background: var(--surface);
  color: var(--text);
}

.input-field:focus {
  outline: 2px solid var(--purple-400);
  outline-offset: 1px;
}

/* === Tabs === */
.tabs-list {
  display: grid;
  grid-template-columns: 1fr 1fr;
  background: var(--surface-muted);
  padding: 0.25rem;
  border-radius: 0.375rem;
}

.tabs-trigger {
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  border: none;
  border-radius: 0.25rem;
  padding: 0.375rem 0.75rem;
  background: transparent;
  color: var(--text-muted);
  cursor: pointer;
}

.tabs-trigger.active {
  background: var(--surface);
  color: var(--text);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.tabs-content {
  margin-top: 0.5rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.5);
  animation: fade-in 200ms ease both;
}

.auth-modal {
  position: relative;
  width: 100%;
  max-width: 28rem;
  background: var(--surface);
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  animation: pop-in 250ms ease both;
}

.modal-close {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  color: #6b7280;
}

.modal-close:hover {
  color: #374151;
}

/* === Footer === */
.site-footer {
  background: #1f2937;
  color: #ffffff;
  padding: 2rem;
}

.footer-inner {
  text-align: center;
}

.footer-copyright {
  margin-bottom: 1rem;
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

/* === Animations === */
@keyframes slide-down {
  from { transform: translateY(-100px); }
  to { transform: translateY(0); }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(50px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pop-in {
  from { transform: scale(0.9) translateY(50px); }
  to { transform: scale(1) translateY(0); }
}

@keyframes wobble {
  0%   { transform: scale(1) rotate(0deg); }
  33%  { transform: scale(1.05) rotate(5deg); }
  50%  { transform: scale(1.1) rotate(0deg); }
  66%  { transform: scale(1.05) rotate(-5deg); }
  100% { transform: scale(1) rotate(0deg); }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation: none !important;
    transition: none !important;
  }
}
"#;
