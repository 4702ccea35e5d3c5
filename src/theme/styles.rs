//! Global CSS styles for the portfolio page.
//!
//! Light palette on `:root`, dark palette under `[data-theme="dark"]` on
//! the body.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --accent: #6c5ce7;
  --accent-soft: rgba(108, 92, 231, 0.12);
  --bg: #ffffff;
  --bg-alt: #f8f9fa;
  --surface: #ffffff;
  --border: #e3e6ea;
  --text: #2d3436;
  --text-muted: #636e72;
  --success: #00b894;
  --danger: #d63031;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.08);

  --font-sans: 'Poppins', 'Segoe UI', system-ui, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

[data-theme="dark"] {
  --bg: #121212;
  --bg-alt: #1b1b1f;
  --surface: #1f1f24;
  --border: #2c2c33;
  --text: #f1f2f6;
  --text-muted: #a4b0be;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.45);
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
  line-height: 1.7;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: var(--accent);
  text-decoration: none;
}

img {
  max-width: 100%;
}

.container {
  width: 100%;
  max-width: 1140px;
  margin: 0 auto;
  padding: 0 1rem;
}

.row {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
}

.col-md-6 { flex: 1 1 calc(50% - 1.5rem); min-width: 260px; }
.col-lg-4 { flex: 1 1 calc(33.333% - 1.5rem); }
.h-100 { height: 100%; }
.mb-3 { margin-bottom: 1rem; }
.text-center { text-align: center; }
.img-fluid { max-width: 100%; height: auto; }
.d-none { display: none !important; }

/* === Navbar === */
.custom-navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  backdrop-filter: blur(10px);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar-brand {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--accent);
}

.navbar-nav {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text);
  font-weight: 500;
  position: relative;
}

.nav-link.active,
.nav-link:hover {
  color: var(--accent);
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 100%;
  height: 2px;
  background: var(--accent);
}

.navbar-toggler {
  display: none;
  background: none;
  border: none;
  color: var(--text);
  cursor: pointer;
}

/* === Theme Toggle === */
.theme-toggle {
  position: fixed;
  top: 50%;
  right: 1.5rem;
  z-index: 1100;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  box-shadow: var(--shadow);
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform 0.4s ease;
}

/* === Hero === */
.hero-section {
  min-height: 100vh;
  display: flex;
  align-items: center;
  position: relative;
  background: linear-gradient(135deg, var(--accent-soft), transparent 60%);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
}

.highlight {
  color: var(--accent);
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-muted);
  min-height: 2.4rem;
}

.typed-cursor {
  display: inline-block;
  margin-left: 2px;
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-muted);
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 8px); }
}

/* === Sections === */
section {
  padding: 6rem 0;
}

.about-section,
.projects-section {
  background: var(--bg-alt);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

.section-subtitle {
  text-align: center;
  color: var(--text-muted);
  margin-bottom: 3rem;
}

/* === Reveal === */
.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === About Stats === */
.about-stats {
  display: flex;
  justify-content: space-around;
  gap: 1.5rem;
  margin-top: 2.5rem;
}

.stat-item {
  text-align: center;
}

.stat-number {
  display: block;
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem 3rem;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.skill-name {
  font-weight: 600;
}

.skill-level {
  color: var(--text-muted);
}

.progress {
  height: 8px;
  border-radius: 4px;
  background: var(--border);
  overflow: hidden;
}

.progress-bar {
  height: 100%;
  background: var(--accent);
  transition: width 1s ease;
}

/* === Project Cards === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: var(--shadow);
  display: flex;
  flex-direction: column;
}

.project-card {
  transition: transform var(--transition-normal), opacity var(--transition-slow);
}

.card-img-top {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.card-body {
  padding: 1.25rem;
  flex: 1;
}

.card-title {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.card-text {
  color: var(--text-muted);
}

.card-footer {
  display: flex;
  gap: 0.5rem;
  padding: 1rem 1.25rem;
  border-top: 1px solid var(--border);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.badge {
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  background: var(--accent-soft);
  color: var(--accent);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.6rem 1.4rem;
  border-radius: 8px;
  border: 1px solid transparent;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-sm {
  padding: 0.35rem 0.9rem;
  font-size: 0.875rem;
}

.btn-primary {
  background: var(--accent);
  color: #ffffff;
}

.btn-outline-primary {
  border-color: var(--accent);
  background: transparent;
  color: var(--accent);
}

.btn-outline-primary:hover {
  background: var(--accent);
  color: #ffffff;
}

.btn-outline-light {
  border-color: var(--border);
  background: transparent;
  color: var(--text);
}

.btn-link {
  background: none;
  color: var(--accent);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-close {
  width: 2rem;
  height: 2rem;
  border: none;
  background: none;
  color: var(--text-muted);
  font-size: 1.25rem;
  cursor: pointer;
}

.btn-close::before {
  content: '\00d7';
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
  margin-bottom: 2.5rem;
}

.contact-item {
  display: block;
  padding: 1.5rem;
  text-align: center;
  border-radius: 12px;
  background: var(--surface);
  border: 1px solid var(--border);
  color: var(--text);
}

.contact-item p {
  color: var(--text-muted);
  word-break: break-all;
}

/* === Forms === */
.form-label {
  display: block;
  margin-bottom: 0.35rem;
  font-weight: 500;
}

.form-control {
  width: 100%;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--bg);
  color: var(--text);
  font: inherit;
}

.form-control:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.form-control.is-valid {
  border-color: var(--success);
}

.form-control.is-invalid {
  border-color: var(--danger);
}

.invalid-feedback {
  display: none;
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--danger);
}

.form-control.is-invalid ~ .invalid-feedback,
.was-validated .form-control.is-invalid ~ .invalid-feedback {
  display: block;
}

/* === Alerts === */
.alert {
  padding: 0.8rem 1rem;
  border-radius: 8px;
  margin-bottom: 1rem;
}

.alert-success {
  background: rgba(0, 184, 148, 0.12);
  color: var(--success);
}

.alert-danger {
  background: rgba(214, 48, 49, 0.12);
  color: var(--danger);
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 1040;
  background: rgba(0, 0, 0, 0.5);
}

.modal {
  position: fixed;
  inset: 0;
  z-index: 1050;
  display: none;
  overflow-y: auto;
}

.modal.show {
  display: block;
}

.modal-dialog {
  max-width: 560px;
  margin: 4rem auto;
  padding: 0 1rem;
}

.modal-dialog-centered {
  display: flex;
  align-items: center;
  min-height: calc(100% - 8rem);
}

.modal-lg {
  max-width: 900px;
}

.modal-content {
  width: 100%;
  background: var(--surface);
  color: var(--text);
  border-radius: 12px;
  box-shadow: var(--shadow);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.modal-body {
  padding: 1.5rem;
}

.modal-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  padding-top: 1rem;
}

.project-view-image {
  display: block;
  margin: 0 auto;
  border-radius: 8px;
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Mobile === */
@media (max-width: 768px) {
  .navbar-toggler {
    display: block;
  }

  .navbar-collapse {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 1rem 2rem;
    background: var(--surface);
  }

  .navbar-collapse.show {
    display: block;
  }

  .navbar-nav {
    flex-direction: column;
    gap: 0.75rem;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .about-stats {
    flex-direction: column;
  }

  .theme-toggle {
    top: auto;
    bottom: 1.5rem;
    transform: none;
  }
}
"#;
