#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-checklist-ui]";

/// Default CSS for the page along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --checklist-font-body: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --checklist-font-display: 'Bebas Neue', 'Oswald', Impact, sans-serif;
  --checklist-font-hand: 'Caveat', 'Comic Sans MS', cursive;
  --checklist-cream: #fdfbf7;
  --checklist-ink: #1a1a1a;
  --checklist-orange: #d9622b;
  --checklist-pink: #d98e8e;
  --checklist-olive: #6b7a3a;
  --checklist-muted: #6b7280;
  --checklist-margin-line: rgba(248, 113, 113, 0.5);
  --checklist-shadow: 4px 4px 0 var(--checklist-ink);
  --checklist-shadow-active: 2px 2px 0 var(--checklist-ink);
  --checklist-radius-pill: 999px;
}

.checklist-root {
  font-family: var(--checklist-font-body);
  color: var(--checklist-ink);
  background: rgba(255, 255, 255, 0.5);
  max-width: 480px;
  margin: 0 auto;
  min-height: 100vh;
  padding: 32px 24px;
  border-left: 2px dashed #d1d5db;
  border-right: 2px dashed #d1d5db;
  box-shadow: 0 24px 48px rgba(15, 23, 42, 0.12);
}

.checklist-root h2 {
  font-family: var(--checklist-font-display);
  text-transform: uppercase;
  font-size: 1.9rem;
  margin: 0 0 20px;
}

.accent {
  color: var(--checklist-orange);
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

.hero {
  text-align: center;
  margin-bottom: 40px;
}

.hero-eyebrow {
  font-family: var(--checklist-font-display);
  font-size: 1.5rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.hero-lead {
  font-size: 1.15rem;
  line-height: 1.5;
}

.hero-accent {
  color: var(--checklist-orange);
  font-weight: 700;
}

.checklist-title {
  display: inline-block;
  border-bottom: 4px solid var(--checklist-orange);
  transform: rotate(-1deg);
}

.checklist-paper {
  position: relative;
  background: var(--checklist-cream);
  border: 1px solid #d1d5db;
  padding: 24px 24px 24px 56px;
  min-height: 320px;
  box-shadow: 8px 8px 0 #e5e7eb;
}

.checklist-paper::before {
  content: '';
  position: absolute;
  top: 0;
  bottom: 0;
  left: 32px;
  width: 2px;
  border-left: 1px solid var(--checklist-margin-line);
  border-right: 1px solid var(--checklist-margin-line);
}

.checklist-prompt {
  font-family: var(--checklist-font-display);
  text-transform: uppercase;
  letter-spacing: 0.12em;
  font-size: 0.85rem;
  color: var(--checklist-muted);
}

.symptom-list {
  list-style: none;
  margin: 0 0 32px;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.symptom-item label {
  display: flex;
  align-items: center;
  gap: 16px;
  cursor: pointer;
  user-select: none;
}

.symptom-mark {
  flex-shrink: 0;
  width: 28px;
  height: 28px;
  border: 2px solid var(--checklist-ink);
  border-radius: 50%;
  background: #ffffff;
  color: transparent;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--checklist-font-display);
  font-size: 1.8rem;
  transition: all 0.3s ease-out;
}

.symptom-label {
  font-family: var(--checklist-font-hand);
  font-size: 1.5rem;
  position: relative;
  transition: color 0.3s;
}

.symptom-item.is-checked .symptom-mark {
  background: var(--checklist-orange);
  border-color: var(--checklist-orange);
  color: #ffffff;
}

.symptom-item.is-checked .symptom-label {
  color: #9ca3af;
  text-decoration: line-through var(--checklist-orange) 2px;
}

.result-area {
  min-height: 120px;
  display: flex;
  align-items: flex-end;
}

.reveal-button {
  width: 100%;
  background: var(--checklist-ink);
  color: #ffffff;
  font-family: var(--checklist-font-display);
  font-size: 1.25rem;
  text-transform: uppercase;
  padding: 12px;
  border: none;
  box-shadow: var(--checklist-shadow);
  display: flex;
  justify-content: center;
  gap: 8px;
  cursor: pointer;
}

.result-card {
  width: 100%;
  padding: 24px;
  border: 2px solid var(--checklist-ink);
  color: #ffffff;
}

.result-card[data-level="critical"] {
  background: var(--checklist-orange);
}

.result-card[data-level="minor"] {
  background: var(--checklist-olive);
  transform: rotate(1deg);
}

.result-card h3 {
  font-family: var(--checklist-font-display);
  text-transform: uppercase;
  font-size: 1.5rem;
  margin: 0 0 8px;
  padding-bottom: 8px;
  border-bottom: 2px solid rgba(255, 255, 255, 0.2);
}

.result-action {
  display: flex;
  justify-content: center;
  gap: 8px;
  width: 100%;
  padding: 12px;
  background: #ffffff;
  color: var(--checklist-ink);
  font-family: var(--checklist-font-display);
  font-size: 1.25rem;
  text-transform: uppercase;
  text-decoration: none;
  border: 2px solid var(--checklist-ink);
  box-shadow: var(--checklist-shadow);
  cursor: pointer;
}

.info-section {
  margin-top: 48px;
}

.info-card {
  display: flex;
  gap: 20px;
  padding: 16px 0;
  border-bottom: 1px dashed rgba(26, 26, 26, 0.2);
}

.info-icon {
  font-size: 2.25rem;
  width: 48px;
  text-align: center;
}

.info-card h3 {
  font-family: var(--checklist-font-display);
  text-transform: uppercase;
  margin: 0 0 4px;
}

.take-action {
  margin-top: 48px;
  text-align: center;
}

.action-button {
  display: block;
  width: 100%;
  box-sizing: border-box;
  margin-bottom: 16px;
  padding: 16px 24px;
  border: 2px solid var(--checklist-ink);
  border-radius: var(--checklist-radius-pill);
  box-shadow: var(--checklist-shadow);
  font-family: var(--checklist-font-display);
  font-size: 1.5rem;
  letter-spacing: 0.04em;
  text-transform: uppercase;
  text-decoration: none;
  cursor: pointer;
  transition: transform 0.15s, box-shadow 0.15s;
}

.action-button:hover {
  transform: translate(2px, 2px);
  box-shadow: var(--checklist-shadow-active);
}

.action-button:disabled {
  opacity: 0.7;
  cursor: not-allowed;
}

.action-specialist {
  background: var(--checklist-orange);
  color: #ffffff;
}

.action-book {
  background: var(--checklist-pink);
  color: #ffffff;
}

.action-script {
  background: var(--checklist-olive);
  color: #ffffff;
}

.action-info {
  background: #ffffff;
  color: var(--checklist-ink);
}

.script-panel {
  margin-bottom: 24px;
}

.script-card {
  text-align: left;
  background: #ffffff;
  border: 2px solid var(--checklist-ink);
  border-top: 8px solid rgba(107, 122, 58, 0.2);
  border-radius: 12px;
  padding: 24px;
}

.script-card h4 {
  font-family: var(--checklist-font-display);
  color: var(--checklist-olive);
  font-size: 1.25rem;
  margin: 0 0 12px;
}

.script-text {
  font-style: italic;
  font-size: 1.1rem;
  padding-left: 16px;
  border-left: 4px solid rgba(107, 122, 58, 0.3);
}

.script-copy {
  background: none;
  border: none;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: #9ca3af;
  cursor: pointer;
}

.checklist-footer {
  margin-top: 64px;
  padding-top: 40px;
  border-top: 2px dashed rgba(26, 26, 26, 0.3);
  text-align: center;
  color: var(--checklist-muted);
  font-size: 0.875rem;
}

.footer-partners {
  display: flex;
  justify-content: center;
  gap: 16px;
  font-family: var(--checklist-font-display);
  letter-spacing: 0.12em;
  opacity: 0.6;
}

.footer-dot {
  color: var(--checklist-orange);
}

.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 16px;
  background: rgba(26, 26, 26, 0.6);
}

.modal-sheet {
  width: 100%;
  max-width: 520px;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--checklist-cream);
  border: 2px solid var(--checklist-ink);
  box-shadow: 8px 8px 0 var(--checklist-ink);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 16px 24px;
  background: var(--checklist-orange);
  color: #ffffff;
}

.modal-header h2 {
  margin: 0;
}

.modal-close {
  background: none;
  border: none;
  color: #ffffff;
  font-size: 2rem;
  cursor: pointer;
}

.intake-form,
.modal-confirmation {
  padding: 24px;
}

.modal-confirmation {
  text-align: center;
}

.confirmation-mark {
  width: 64px;
  height: 64px;
  margin: 0 auto 16px;
  border-radius: 50%;
  background: var(--checklist-olive);
  color: #ffffff;
  font-size: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.form-section {
  font-family: var(--checklist-font-display);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  border-bottom: 2px solid var(--checklist-ink);
  margin-bottom: 16px;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 16px;
  margin-bottom: 16px;
}

.intake-form label {
  display: flex;
  flex-direction: column;
  gap: 4px;
  font-size: 0.8rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.intake-form input,
.intake-form select,
.intake-form textarea {
  font: inherit;
  font-weight: 400;
  text-transform: none;
  letter-spacing: normal;
  padding: 8px 10px;
  border: 2px solid var(--checklist-ink);
  background: #ffffff;
}

.form-notes {
  margin-bottom: 16px;
}

.form-error {
  color: #b42318;
  font-weight: 600;
}

.form-footnote {
  font-size: 0.75rem;
  color: var(--checklist-muted);
  text-align: center;
}

@media (max-width: 420px) {
  .form-row {
    grid-template-columns: 1fr;
  }

  .checklist-paper {
    padding-left: 44px;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head> element"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-checklist-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
