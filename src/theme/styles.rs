//! Styles for reminder windows. Minimal on purpose: a reminder is a
//! block of mono text with two buttons underneath.

pub const REMINDER_STYLES: &str = r#"
:root {
  --bg: #f5f0e6;
  --text: #1a1a1a;
  --border: #c9c2b2;
  --done: #5a7a5a;
  --later: #8a8472;

  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-mono);
}

.reminder {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  height: 100vh;
  padding: 1rem;
}

.reminder-text {
  font-size: 1rem;
  font-weight: bold;
  white-space: pre-wrap;
  overflow-y: auto;
}

.reminder-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
  margin-top: 0.75rem;
}

.btn {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  padding: 0.35rem 1.1rem;
  border: 1px solid var(--border);
  border-radius: 3px;
  background: transparent;
  cursor: pointer;
}

.btn-done {
  border-color: var(--done);
  color: var(--done);
}

.btn-done:hover {
  background: var(--done);
  color: var(--bg);
}

.btn-later {
  border-color: var(--later);
  color: var(--later);
}

.btn-later:hover {
  background: var(--later);
  color: var(--bg);
}
"#;
