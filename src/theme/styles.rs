//! Global CSS styles for the Ihsan Charity desktop app.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --sand: #faf7f0;
  --card: #ffffff;
  --border: #e6dfcf;

  /* BRAND */
  --teal: #0f766e;
  --teal-dark: #115e59;
  --gold: #c8a04a;

  /* TEXT */
  --text-primary: #1f2933;
  --text-secondary: #52606d;
  --text-muted: #9aa5b1;

  /* SEMANTIC */
  --success: #2f855a;
  --info: #2b6cb0;
  --warning: #c05621;
  --danger: #c53030;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-serif: 'Amiri', Georgia, serif;
  --radius: 10px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--sand);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: var(--card);
  border-bottom: 1px solid var(--border);
}

.nav-brand {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--teal);
  text-decoration: none;
}

.nav-links { display: flex; gap: 1.5rem; }

.nav-link {
  position: relative;
  color: var(--text-secondary);
  text-decoration: none;
}

.nav-link.active { color: var(--teal); font-weight: 600; }

.cart-badge {
  margin-left: 0.4rem;
  padding: 0.05rem 0.45rem;
  border-radius: 999px;
  background: var(--gold);
  color: var(--card);
  font-size: 0.75rem;
}

.page { max-width: 1100px; margin: 0 auto; padding: 2rem; }

.page-title { font-family: var(--font-serif); color: var(--teal-dark); }
.tagline, .body-text { color: var(--text-secondary); line-height: 1.5; }

/* === Buttons & Inputs === */
.btn-primary, .btn-secondary, .amount-btn, .filter-btn {
  display: inline-block;
  padding: 0.6rem 1.2rem;
  border-radius: var(--radius);
  border: 1px solid var(--teal);
  cursor: pointer;
  text-decoration: none;
  font-size: 0.95rem;
}

.btn-primary { background: var(--teal); color: var(--card); }
.btn-primary:hover { background: var(--teal-dark); }
.btn-primary:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-secondary, .amount-btn, .filter-btn { background: var(--card); color: var(--teal); }
.amount-btn.selected, .filter-btn.active { background: var(--teal); color: var(--card); }
.filter-btn { text-transform: capitalize; }

.input-field {
  width: 100%;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font-size: 0.95rem;
}

.input-field.invalid { border-color: var(--danger); }

/* === Donate === */
.hero { text-align: center; margin-bottom: 2rem; }

.giving-grid, .project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.giving-card, .project-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.25rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.project-card { padding: 0; overflow: hidden; }
.project-card.featured { border-color: var(--gold); }
.project-image { width: 100%; height: 160px; object-fit: cover; }
.project-body { display: flex; flex-direction: column; gap: 0.6rem; padding: 1.25rem; }

.card-title { margin: 0; font-size: 1.2rem; }
.card-category { color: var(--gold); font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.05em; }

.amount-picker { display: flex; flex-direction: column; gap: 0.5rem; }
.amount-presets { display: flex; flex-wrap: wrap; gap: 0.4rem; }
.amount-echo { color: var(--text-muted); font-size: 0.85rem; }

.page-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }

/* === Projects === */
.category-filter { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }

.progress { height: 8px; background: var(--border); border-radius: 999px; overflow: hidden; }
.progress-bar { height: 100%; background: var(--teal); }
.progress-label { margin: 0; color: var(--text-muted); font-size: 0.85rem; }

/* === Cart === */
.cart-layout { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; align-items: start; }
.cart-items { display: flex; flex-direction: column; gap: 0.75rem; }

.cart-line {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.cart-line-image { width: 56px; height: 56px; object-fit: cover; border-radius: 6px; }
.cart-line-info { flex: 1; display: flex; flex-direction: column; }
.cart-line-title { font-weight: 600; }
.cart-line-category { color: var(--text-muted); font-size: 0.85rem; }
.cart-line-amount { display: flex; align-items: center; gap: 0.5rem; width: 200px; }
.cart-line-total { min-width: 80px; text-align: right; }

.cart-line-remove {
  border: none;
  background: none;
  color: var(--text-muted);
  font-size: 1.4rem;
  cursor: pointer;
}

.cart-line-remove:hover { color: var(--danger); }

.cart-summary {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.25rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.options-form { display: flex; flex-direction: column; gap: 0.75rem; }
.option-group { border: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.4rem; }
.option-group legend { font-weight: 600; margin-bottom: 0.3rem; }
.option-row { display: flex; align-items: center; gap: 0.5rem; }

.totals { border-top: 1px solid var(--border); padding-top: 0.75rem; }
.totals-row { display: flex; justify-content: space-between; padding: 0.25rem 0; }
.totals-row.muted { color: var(--text-muted); }
.totals-row.total { font-weight: 700; font-size: 1.15rem; }
.btn-checkout { width: 100%; }

.empty-cart, .receipt { text-align: center; display: flex; flex-direction: column; gap: 1rem; align-items: center; }

.receipt-details { display: grid; grid-template-columns: auto auto; gap: 0.4rem 1.5rem; text-align: left; }
.receipt-details dt { color: var(--text-muted); }
.receipt-details dd { margin: 0; }

/* === Notifications === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
}

.toast {
  min-width: 260px;
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  color: var(--card);
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15);
  cursor: pointer;
}

.toast-success { background: var(--success); }
.toast-info { background: var(--info); }
.toast-warning { background: var(--warning); }
"#;
