//! Global CSS styles for the link-in-bio site.
//!
//! Custom properties come from [`super::root_variables`]; widget internals
//! are styled inside their own template fragments.

pub const GLOBAL_STYLES: &str = r#"
/* === Tokens that don't change with the theme === */
:root {
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --radius: 16px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --header-height: 64px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
}

.hidden {
  display: none !important;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.65rem 1.2rem;
  border-radius: 999px;
  border: 1px solid transparent;
  font-weight: 700;
  text-decoration: none;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn:hover {
  transform: translateY(-1px);
}

.btn-primary {
  background: var(--accent-blue);
  color: #0b1120;
}

.btn-outline {
  background: transparent;
  border-color: var(--accent-orange);
  color: var(--text);
}

.icon-btn {
  display: inline-grid;
  place-items: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  text-decoration: none;
  cursor: pointer;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  padding: 0 1.25rem;
  background: color-mix(in srgb, var(--bg) 85%, transparent);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--border);
}

.site-header__brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  text-decoration: none;
  font-weight: 800;
}

.site-header__logo {
  display: grid;
  place-items: center;
  width: 2.2rem;
  height: 2.2rem;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--accent-blue), var(--accent-orange));
  color: #0b1120;
  font-size: 0.85rem;
}

.site-header__actions {
  display: flex;
  gap: 0.5rem;
}

/* === Mobile menu === */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 60;
  visibility: hidden;
  pointer-events: none;
}

.mobile-menu.open {
  visibility: visible;
  pointer-events: auto;
}

.mobile-menu-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(2, 6, 23, 0.6);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.mobile-menu.open .mobile-menu-backdrop {
  opacity: 1;
}

.mobile-menu__panel {
  position: absolute;
  top: 0;
  right: 0;
  bottom: 0;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  width: min(80vw, 320px);
  padding: 4rem 1.25rem 1.25rem;
  background: var(--surface);
  border-left: 1px solid var(--border);
  transform: translateX(100%);
  transition: transform var(--transition-normal);
}

.mobile-menu.open .mobile-menu__panel {
  transform: none;
}

.mobile-menu__close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
}

.mobile-menu__link {
  padding: 0.75rem 0.5rem;
  border-radius: 10px;
  text-decoration: none;
  font-weight: 600;
}

.mobile-menu__link:hover {
  background: var(--border);
}

/* === Layout === */
.home {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  max-width: 960px;
  margin: 0 auto;
  padding: 1.5rem 1.25rem 3rem;
}

.home__section {
  scroll-margin-top: calc(var(--header-height) + 1rem);
}

.hero {
  text-align: center;
  padding: 1.5rem 0 0.5rem;
}

.hero__title {
  font-size: clamp(1.8rem, 5vw, 2.8rem);
  line-height: 1.15;
  background: linear-gradient(90deg, var(--accent-blue), var(--accent-orange));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero__subtitle {
  margin-top: 0.75rem;
  color: var(--text-muted);
}

.card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  align-items: flex-start;
  padding: 1.4rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
}

.card p {
  color: var(--text-muted);
}

.bubbles {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.25rem;
}

/* === Newsletter === */
.newsletter {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.newsletter-form {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  width: 100%;
}

.newsletter-form__input {
  flex: 1 1 14rem;
  min-width: 0;
  padding: 0.65rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--bg);
  color: var(--text);
}

.newsletter-modal {
  position: fixed;
  inset: 0;
  z-index: 70;
  display: grid;
  place-items: center;
}

.newsletter-modal .modal-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(2, 6, 23, 0.7);
}

.newsletter-modal__dialog {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  width: min(92vw, 440px);
  padding: 1.75rem 1.5rem 1.5rem;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
  animation: pop-in var(--transition-normal);
}

.newsletter-modal__close {
  position: absolute;
  top: 0.6rem;
  right: 0.6rem;
}

/* === Accordion === */
.faq {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.accordion {
  border-radius: 12px;
  background: var(--surface);
  border: 1px solid var(--border);
  overflow: hidden;
}

.accordion__toggle {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  padding: 0.9rem 1.1rem;
  border: 0;
  background: transparent;
  color: var(--text);
  font: inherit;
  font-weight: 600;
  text-align: left;
  cursor: pointer;
}

.accordion__icon {
  transition: transform var(--transition-fast);
}

.accordion.open .accordion__icon {
  transform: rotate(180deg);
}

.accordion__body {
  display: none;
  padding: 0 1.1rem 1rem;
  color: var(--text-muted);
}

.accordion.open .accordion__body {
  display: block;
}

/* === Toast === */
.toast {
  position: fixed;
  left: 50%;
  bottom: 1.5rem;
  z-index: 90;
  transform: translateX(-50%);
  padding: 0.75rem 1.2rem;
  border-radius: 12px;
  color: #ffffff;
  font-weight: 600;
  box-shadow: 0 10px 30px rgba(2, 6, 23, 0.35);
  animation: pop-in var(--transition-normal);
}

.toast--success {
  background: var(--success);
}

.toast--error {
  background: var(--danger);
}

/* === Planet system === */
.planet-system {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.planet-system__space {
  position: relative;
  height: clamp(360px, 62vw, 520px);
  overflow: hidden;
  border-radius: var(--radius);
  background:
    radial-gradient(circle at 50% 50%, rgba(56, 189, 248, 0.12), transparent 60%),
    var(--surface);
  border: 1px solid var(--border);
  cursor: grab;
  touch-action: none;
  user-select: none;
}

.planet-system__space--panning {
  cursor: grabbing;
}

.planet-system__viewport {
  position: absolute;
  inset: 0;
  transform-origin: 50% 50%;
  transition: transform 120ms ease-out;
}

.planet-system__space--panning .planet-system__viewport {
  transition: none;
}

.planet-system__layers,
.planet-system__center-layer,
.planet-system__orbits-layer {
  position: absolute;
  inset: 0;
}

.planet-system__center-layer {
  display: grid;
  place-items: center;
  z-index: 2;
}

.planet-system__center-layer > .planet {
  pointer-events: auto;
}

.planet-system__orbits-layer {
  pointer-events: none;
}

.planet-system--enter-a {
  animation: system-enter-a 420ms ease-out;
}

.planet-system--enter-b {
  animation: system-enter-b 420ms ease-out;
}

@keyframes system-enter-a {
  from { opacity: 0; transform: scale(0.92); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes system-enter-b {
  from { opacity: 0; transform: scale(0.92); }
  to { opacity: 1; transform: scale(1); }
}

.planet-system__controls {
  position: absolute;
  right: 0.75rem;
  bottom: 0.75rem;
  z-index: 5;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.planet-system__control {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg);
  color: var(--text);
  font-size: 1.1rem;
  cursor: pointer;
}

/* === Orbits === */
.orbit {
  position: absolute;
  top: 50%;
  left: 50%;
  width: calc(var(--orbit-radius) * 2);
  height: calc(var(--orbit-radius) * 2);
  margin: calc(var(--orbit-radius) * -1) 0 0 calc(var(--orbit-radius) * -1);
  border-radius: 50%;
  border: 1px dashed var(--border);
  animation: orbit-spin var(--orbit-duration) linear infinite;
}

.orbit--satellites {
  border-style: dotted;
}

.orbit > .planet {
  position: absolute;
  top: 50%;
  left: 50%;
  pointer-events: auto;
  transform:
    translate(-50%, -50%)
    rotate(var(--planet-angle))
    translateY(calc(var(--orbit-radius) * -1))
    rotate(calc(var(--planet-angle) * -1));
}

/* Keep labels upright while the ring turns */
.orbit > .planet > .planet__body,
.orbit > .planet > .planet__title {
  animation: orbit-spin var(--orbit-duration) linear infinite reverse;
}

@keyframes orbit-spin {
  to { transform: rotate(360deg); }
}

/* === Planets === */
.planet {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.35rem;
  border: 0;
  background: none;
  color: var(--text);
  font: inherit;
  cursor: pointer;
}

.planet__body {
  position: relative;
  display: grid;
  place-items: center;
  width: 64px;
  height: 64px;
  border-radius: 50%;
  background: var(--bg);
  border: 2px solid var(--planet-accent, var(--accent-blue));
  transition: transform var(--transition-fast);
}

.planet:hover .planet__body {
  transform: scale(1.08);
}

.planet--center .planet__body {
  width: 104px;
  height: 104px;
}

.planet--root .planet__body {
  border-image: linear-gradient(135deg, var(--accent-blue), var(--accent-orange)) 1;
  border-radius: 50%;
}

.planet__body--satellite {
  width: 26px;
  height: 26px;
  border-width: 1px;
}

.planet__glow {
  position: absolute;
  inset: -10px;
  border-radius: 50%;
  background: radial-gradient(circle, color-mix(in srgb, var(--planet-accent, var(--accent-blue)) 35%, transparent), transparent 70%);
  z-index: -1;
}

.planet__logo {
  font-weight: 800;
  font-size: 1.1rem;
}

.planet__logo--satellite {
  font-size: 0.55rem;
}

.planet__logo-img {
  width: 70%;
  height: 70%;
  object-fit: contain;
  border-radius: 50%;
  pointer-events: none;
}

.planet__logo-img--satellite {
  width: 80%;
  height: 80%;
}

.planet__title {
  font-size: 0.8rem;
  font-weight: 600;
  white-space: nowrap;
}

.planet__title--below-logo {
  margin-top: 0.2rem;
}

.planet__title--satellite-below-logo {
  font-size: 0.6rem;
  opacity: 0.8;
}

.planet__subtitle {
  font-size: 0.7rem;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

/* === Widget hosts === */
.ts-modal,
.newsletter-bar-host,
.patreon-banner-host,
.planet-info-host {
  display: block;
}

.planet-bubble-host {
  display: inline-block;
}

/* === Bubble modal contents === */
.pb-modal {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.pb-modal__header {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.pb-modal__thumb {
  display: grid;
  place-items: center;
  flex: 0 0 72px;
  height: 72px;
  border-radius: 50%;
  overflow: hidden;
  background: var(--bg);
  border: 2px solid var(--accent-blue);
  font-weight: 800;
}

.pb-modal__thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.pb-modal__kicker {
  font-size: 0.7rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--accent-orange);
}

.pb-modal__subtitle,
.pb-modal__description {
  color: var(--text-muted);
}

.pb-modal__actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

/* === Footer === */
.site-footer {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 2rem 1.25rem;
  border-top: 1px solid var(--border);
}

.footer-social {
  display: flex;
  gap: 1rem;
}

.footer-social__link {
  text-decoration: none;
  font-weight: 600;
  color: var(--text-muted);
}

.footer-social__link:hover {
  color: var(--accent-blue);
}

.site-footer__copy {
  font-size: 0.8rem;
  color: var(--text-muted);
}

/* === Error / not found === */
.site-error,
.not-found {
  display: grid;
  place-items: center;
  min-height: 70vh;
  padding: 2rem;
  text-align: center;
}

.not-found__card {
  align-items: center;
}

@keyframes pop-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: none; }
}

@media (min-width: 768px) {
  .site-header__menu-toggle {
    display: none;
  }
}

@media (prefers-reduced-motion: reduce) {
  .orbit,
  .orbit > .planet > .planet__body,
  .orbit > .planet > .planet__title,
  .planet-system--enter-a,
  .planet-system--enter-b {
    animation: none;
  }
}
"#;
