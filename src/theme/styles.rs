//! Global CSS styles for F-list.
//!
//! Light, phone-width layout: profile header, tabs, a two-column item grid
//! and a floating add button.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #ffffff;
  --paper-dim: #f6f6f4;
  --line: #e4e4e0;

  /* Ink */
  --ink: #1b1b1b;
  --ink-soft: #5c5c5c;
  --ink-faint: #a3a3a3;

  /* Accent */
  --accent: #111111;
  --accent-contrast: #ffffff;
  --danger: #d93838;

  /* Typography */
  --font-sans: 'Pretendard', 'Apple SD Gothic Neo', 'Helvetica Neue', Arial, sans-serif;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
  --space-xl: 2rem;

  --radius: 10px;
  --shadow: 0 6px 24px rgba(0, 0, 0, 0.12);
}

/* === Base === */
* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--paper-dim);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: 15px;
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

button:disabled {
  opacity: 0.5;
  cursor: default;
}

img {
  display: block;
  max-width: 100%;
}

.page {
  max-width: 480px;
  min-height: 100vh;
  margin: 0 auto;
  background: var(--paper);
  position: relative;
  padding-bottom: 6rem;
}

/* === Header === */
.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-md) var(--space-lg);
  border-bottom: 1px solid var(--line);
  background: var(--paper);
}

.app-title {
  font-size: 1.4rem;
  font-weight: 800;
  letter-spacing: -0.02em;
}

.header-buttons {
  display: flex;
  gap: var(--space-sm);
}

.header-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  text-decoration: none;
  color: var(--ink);
  font-size: 1.1rem;
}

.header-btn:hover {
  background: var(--paper-dim);
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
}

/* === Profile === */
.profile {
  display: flex;
  gap: var(--space-lg);
  padding: var(--space-lg);
  border-bottom: 1px solid var(--line);
}

.avatar-wrap {
  position: relative;
  flex-shrink: 0;
  cursor: pointer;
}

.avatar {
  width: 88px;
  height: 88px;
  border-radius: 50%;
  object-fit: cover;
  background: var(--paper-dim);
  border: 1px solid var(--line);
}

.photo-menu {
  position: absolute;
  top: 96px;
  left: 0;
  z-index: 20;
  min-width: 160px;
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  overflow: hidden;
}

.photo-menu-item {
  display: block;
  width: 100%;
  padding: var(--space-sm) var(--space-md);
  text-align: left;
}

.photo-menu-item:hover {
  background: var(--paper-dim);
}

.photo-menu-item.cancel {
  color: var(--ink-soft);
  border-top: 1px solid var(--line);
}

.profile-text {
  flex: 1;
  min-width: 0;
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.nickname {
  display: flex;
  align-items: center;
  font-size: 1.15rem;
  font-weight: 700;
  cursor: text;
}

.nickname-prefix {
  margin-right: 2px;
}

.description {
  position: relative;
  cursor: text;
}

.description-text {
  color: var(--ink-soft);
  line-height: 1.5;
  white-space: pre-wrap;
  word-break: break-word;
}

.inline-input,
.inline-textarea {
  width: 100%;
  font: inherit;
  color: inherit;
  border: none;
  border-bottom: 1px solid var(--ink);
  background: transparent;
  outline: none;
  padding: 2px 0;
}

.inline-textarea {
  min-height: 4.5rem;
  resize: none;
  line-height: 1.5;
}

.char-count {
  display: block;
  text-align: right;
  font-size: 0.75rem;
  color: var(--ink-faint);
}

/* === Tabs === */
.tabs {
  display: flex;
  border-bottom: 1px solid var(--line);
}

.tab {
  flex: 1;
  padding: var(--space-md) 0;
  color: var(--ink-faint);
  font-weight: 600;
  border-bottom: 2px solid transparent;
}

.tab.active {
  color: var(--ink);
  border-bottom-color: var(--ink);
}

/* === Items === */
.collection {
  padding: var(--space-md);
}

.item-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-md);
}

.item-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.item-image {
  aspect-ratio: 3 / 4;
  background: var(--paper-dim);
  border-radius: var(--radius);
  overflow: hidden;
}

.item-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.item-info {
  display: flex;
  flex-direction: column;
  gap: 2px;
}

.item-brand {
  font-size: 0.8rem;
  font-weight: 700;
}

.item-name {
  font-size: 0.85rem;
  color: var(--ink-soft);
  overflow: hidden;
  text-overflow: ellipsis;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
}

.item-price {
  font-size: 0.9rem;
  font-weight: 700;
}

.empty-state {
  padding: 4rem var(--space-lg);
  text-align: center;
}

.empty-title {
  font-weight: 700;
  margin-bottom: var(--space-sm);
}

.empty-hint {
  color: var(--ink-faint);
}

/* === Floating add button === */
.fab {
  position: fixed;
  bottom: var(--space-xl);
  right: calc(50% - 240px + var(--space-lg));
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 50%;
  background: var(--accent);
  color: var(--accent-contrast);
  font-size: 1.75rem;
  line-height: 1;
  box-shadow: var(--shadow);
}

@media (max-width: 480px) {
  .fab {
    right: var(--space-lg);
  }
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.4);
  padding: var(--space-lg);
}

.notice-overlay {
  z-index: 200;
}

.modal-content {
  width: 100%;
  max-width: 400px;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: var(--space-lg);
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.modal-header {
  font-size: 1.1rem;
  font-weight: 700;
  margin-bottom: var(--space-sm);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: var(--space-sm);
  margin-top: var(--space-md);
}

.field-label {
  font-size: 0.8rem;
  font-weight: 600;
  color: var(--ink-soft);
  margin-top: var(--space-sm);
}

.input-field {
  width: 100%;
  font: inherit;
  color: var(--ink);
  padding: var(--space-sm) var(--space-md);
  border: 1px solid var(--line);
  border-radius: 6px;
  outline: none;
  background: var(--paper);
}

.input-field:focus {
  border-color: var(--ink);
}

textarea.input-field {
  min-height: 4rem;
  resize: vertical;
}

.price-field {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
}

.price-suffix {
  color: var(--ink-soft);
  font-weight: 600;
}

.btn-primary,
.btn-secondary {
  padding: var(--space-sm) var(--space-lg);
  border-radius: 6px;
  font-weight: 600;
}

.btn-primary {
  background: var(--accent);
  color: var(--accent-contrast);
}

.btn-secondary {
  border: 1px solid var(--line);
}

.notice-modal {
  max-width: 320px;
  align-items: center;
  text-align: center;
  gap: var(--space-md);
}

.notice-message {
  line-height: 1.5;
}

.login-modal {
  align-items: center;
  text-align: center;
}

.login-hint {
  color: var(--ink-soft);
  margin-bottom: var(--space-md);
}

.google-btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-sm);
  padding: var(--space-sm) var(--space-lg);
  border: 1px solid var(--line);
  border-radius: 999px;
  font-weight: 600;
}

.google-btn:hover {
  background: var(--paper-dim);
}

.google-mark {
  font-weight: 800;
  color: #4285f4;
}

/* === Loading === */
.loading-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-md);
  min-height: 60vh;
  color: var(--ink-soft);
}

.spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--line);
  border-top-color: var(--ink);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Style board === */
.board-title {
  padding: var(--space-lg) var(--space-lg) var(--space-sm);
  text-align: center;
}

.board-title-text {
  font-size: 1.3rem;
  font-weight: 700;
  cursor: text;
}

.board-title-text.placeholder {
  color: var(--ink-faint);
}

.board-title-input {
  font-size: 1.3rem;
  font-weight: 700;
  text-align: center;
}

.board-instructions {
  text-align: center;
  color: var(--ink-faint);
  margin-bottom: var(--space-md);
}

.board-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-sm);
  padding: var(--space-md);
}

.board-cell {
  aspect-ratio: 1;
  border-radius: var(--radius);
  background: var(--paper-dim);
  overflow: hidden;
}

.board-cell.photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.board-cell.add {
  border: 2px dashed var(--line);
  font-size: 2rem;
  color: var(--ink-faint);
}

.board-cell.add:hover {
  border-color: var(--ink-faint);
}
"#;
