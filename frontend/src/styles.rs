/// Shared stylesheet for the marketing pages, nav, footer, modals and chat.
pub const SITE_CSS: &str = r#"
:root { --primary: #ea580c; --primary-hover: #c2410c; --creator: #7c3aed; --creator-hover: #6d28d9; --ink: #0a0a0a; --muted: #525252; --line: #e5e5e5; --soft: #f5f5f5; }
body { margin: 0; font-family: "Inter", -apple-system, BlinkMacSystemFont, sans-serif; color: var(--ink); background: #fff; }
.site { min-height: 100vh; background-image: linear-gradient(rgba(0,0,0,0.03) 1px, transparent 1px), linear-gradient(90deg, rgba(0,0,0,0.03) 1px, transparent 1px); background-size: 40px 40px; background-attachment: fixed; }
.site.creator { --primary: var(--creator); --primary-hover: var(--creator-hover); }
.accent { color: var(--primary); }
.spinner { display: inline-block; width: 1rem; height: 1rem; border-radius: 50%; border: 2px solid rgba(255,255,255,0.4); border-top-color: #fff; animation: spin 1s linear infinite; vertical-align: middle; }
@keyframes spin { to { transform: rotate(360deg); } }
.ping { display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #22c55e; margin-right: 0.5rem; box-shadow: 0 0 0 0 rgba(34,197,94,0.6); animation: ping 1.5s infinite; }
@keyframes ping { 70% { box-shadow: 0 0 0 8px rgba(34,197,94,0); } 100% { box-shadow: 0 0 0 0 rgba(34,197,94,0); } }

.top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); border-bottom: 1px solid var(--line); }
.nav-content { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.nav-logo { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; color: var(--ink); }
.logo-text { font-size: 1.5rem; font-weight: 900; letter-spacing: -0.05em; text-transform: uppercase; }
.creator-tag { font-size: 10px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; background: var(--soft); border: 1px solid var(--line); padding: 0.125rem 0.5rem; border-radius: 4px; }
.nav-links { display: flex; gap: 2rem; font-size: 0.875rem; }
.nav-link, .nav-switch { background: none; border: none; color: var(--muted); text-decoration: none; cursor: pointer; font-size: 0.875rem; }
.nav-link:hover, .nav-switch:hover { color: var(--primary); }
.nav-right { display: flex; align-items: center; gap: 1rem; }
.nav-cta, .hero-cta, .drop-confirm, .apply-submit { background: var(--primary); color: #fff; border: none; border-radius: 6px; padding: 0.5rem 1.25rem; font-weight: 700; cursor: pointer; min-width: 140px; }
.nav-cta:hover, .hero-cta:hover, .drop-confirm:hover { background: var(--primary-hover); }
button:disabled { opacity: 0.6; cursor: not-allowed; }
@media (max-width: 768px) { .nav-links, .nav-switch { display: none; } }

.hero { padding: 7rem 1.5rem 3rem; display: flex; flex-direction: column; align-items: center; text-align: center; }
.hero-inner { max-width: 56rem; }
.hero-pill { display: inline-flex; align-items: center; padding: 0.25rem 0.75rem; border-radius: 999px; background: var(--ink); color: #fff; font-size: 0.75rem; font-weight: 700; margin-bottom: 1.5rem; }
.hero h1 { font-size: clamp(2.25rem, 6vw, 4rem); font-weight: 800; letter-spacing: -0.03em; line-height: 1.1; margin: 0 0 1.5rem; }
.hero-line { display: block; }
.accent-line { color: var(--primary); }
.hero-sub { font-size: 1.125rem; color: var(--muted); margin-bottom: 2rem; }
.hero-actions { display: flex; flex-direction: column; align-items: center; gap: 0.75rem; }
.hero-cta { padding: 0.875rem 2rem; font-size: 1rem; }
.hero-trust, .hero-micro { font-size: 0.75rem; color: var(--muted); }
.hero-drop { width: 100%; max-width: 42rem; margin-top: 2.5rem; }
.hero-marquee { width: 100%; max-width: 72rem; margin-top: 3rem; }
.hero-marquee p { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: #a3a3a3; }
.typewriter { white-space: pre-wrap; display: block; }
.typewriter-cursor { color: var(--primary); margin-left: 0.25rem; animation: blink 1s step-end infinite; }
@keyframes blink { 50% { opacity: 0; } }

.marquee { overflow: hidden; opacity: 0.6; padding: 1.5rem 0; }
.marquee-track { display: flex; width: max-content; animation: marquee 30s linear infinite; }
.marquee-group { display: flex; gap: 3rem; padding-right: 3rem; font-size: 1.25rem; font-weight: 700; color: #737373; }
@keyframes marquee { to { transform: translateX(-50%); } }

.section { padding: 4rem 1.5rem; scroll-margin-top: 7rem; }
.section.muted-bg { background: var(--soft); border-top: 1px solid var(--line); border-bottom: 1px solid var(--line); }
.section-inner { max-width: 72rem; margin: 0 auto; }
.section-inner.narrow { max-width: 48rem; }
.section-heading { text-align: center; max-width: 42rem; margin: 0 auto 3rem; }
.section-heading h2 { font-size: 2.25rem; font-weight: 700; letter-spacing: -0.02em; margin: 0 0 0.75rem; }
.section-heading p { color: var(--muted); font-size: 1.125rem; }
.steps { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; margin-bottom: 3rem; }
.step-card { background: #fff; border: 1px solid var(--line); border-radius: 8px; padding: 2rem; }
.step-top { display: flex; justify-content: space-between; margin-bottom: 1rem; }
.step-number { font-size: 0.75rem; font-weight: 700; color: var(--primary); border: 1px solid var(--primary); border-radius: 4px; padding: 0.25rem 0.5rem; }
.step-card h3 { font-size: 1.25rem; margin: 0.75rem 0; }
.step-card p { color: var(--muted); font-size: 0.875rem; line-height: 1.6; }
.did-you-know { display: flex; gap: 1.5rem; background: var(--ink); color: #fff; border-radius: 8px; padding: 2rem; }
.did-you-know p { color: #d4d4d4; line-height: 1.6; }

.carousel { background: #fff; border: 1px solid var(--line); border-radius: 12px; overflow: hidden; }
.carousel-bar { background: var(--soft); border-bottom: 1px solid var(--line); padding: 0.75rem 1rem; font-size: 0.75rem; font-family: monospace; color: var(--muted); }
.carousel-body { position: relative; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; padding: 2rem 3.5rem; align-items: center; }
.carousel-arrow { position: absolute; top: 50%; transform: translateY(-50%); border: 1px solid var(--line); background: #fff; border-radius: 50%; width: 2.5rem; height: 2.5rem; cursor: pointer; font-size: 1.25rem; }
.carousel-arrow.prev { left: 0.5rem; }
.carousel-arrow.next { right: 0.5rem; }
.carousel-badge { display: inline-block; font-size: 0.75rem; font-weight: 700; color: var(--primary); background: rgba(234,88,12,0.08); border-radius: 4px; padding: 0.25rem 0.5rem; }
.carousel-text { text-align: left; }
.carousel-dots { display: flex; gap: 0.5rem; margin-top: 1.5rem; }
.carousel-dot { width: 0.5rem; height: 0.5rem; border-radius: 999px; border: none; background: var(--line); cursor: pointer; transition: width 0.3s; }
.carousel-dot.active { width: 1.5rem; background: var(--primary); }
.mock-phone, .mock-post, .mock-assets { margin: 0 auto; max-width: 16rem; border-radius: 1.5rem; border: 6px solid var(--ink); background: #fff; overflow: hidden; position: relative; min-height: 22rem; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }
.mock-post, .mock-assets { border-width: 1px; border-color: var(--line); border-radius: 12px; padding: 1rem; }
.mock-video { width: 100%; height: 100%; object-fit: cover; }
.mock-caption { position: absolute; bottom: 1rem; left: 1rem; right: 1rem; color: #fff; font-size: 0.75rem; text-align: left; }
.mock-link, .mock-file, .mock-ad { width: 85%; border: 1px solid var(--line); border-radius: 8px; padding: 0.5rem; font-size: 0.75rem; }
.mock-avatar { width: 4rem; height: 4rem; border-radius: 50%; }
@media (max-width: 768px) { .carousel-body { grid-template-columns: 1fr; padding: 2rem 1rem; } }

.comparison { max-width: 56rem; margin: 0 auto; background: #fff; border: 1px solid var(--line); border-radius: 8px; overflow: hidden; }
.comparison-head, .comparison-row { display: grid; grid-template-columns: repeat(3, 1fr); padding: 1rem 1.25rem; align-items: center; }
.comparison-head { background: var(--ink); color: #fff; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.15em; }
.comparison-head .muted { color: #a3a3a3; }
.comparison-row { border-bottom: 1px solid var(--line); }
.comparison-row:last-child { border-bottom: none; }
.comparison-label { font-size: 0.875rem; font-weight: 700; text-transform: uppercase; color: var(--muted); }
.comparison-bad { text-align: center; opacity: 0.6; }
.comparison-good { text-align: center; font-weight: 700; color: var(--primary); }
.comparison-good .check { margin-right: 0.5rem; }

.faq-list { display: flex; flex-direction: column; gap: 1rem; }
.faq-item { background: #fff; border: 1px solid var(--line); border-radius: 4px; }
.faq-item:hover { border-color: var(--primary); }
.faq-question { width: 100%; display: flex; justify-content: space-between; align-items: center; background: none; border: none; padding: 1.5rem; cursor: pointer; text-align: left; }
.faq-question h4 { margin: 0; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; }
.faq-number { color: #d4d4d4; margin-right: 0.5rem; }
.faq-answer { max-height: 0; overflow: hidden; opacity: 0; transition: all 0.3s; padding: 0 1.5rem; }
.faq-item.open .faq-answer { max-height: 500px; opacity: 1; padding-bottom: 1.5rem; }
.faq-answer p { margin: 0; color: var(--muted); font-size: 0.875rem; line-height: 1.6; padding-left: 1.5rem; border-left: 1px solid var(--line); }
.faq-more { text-align: center; margin-top: 2rem; font-size: 0.875rem; color: var(--muted); }
.faq-more a { color: var(--primary); font-weight: 700; }

.live-drop { background: #fff; border: 1px solid var(--line); border-radius: 12px; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.08); overflow: hidden; text-align: left; }
.drop-header { background: rgba(245,245,245,0.3); border-bottom: 1px solid var(--line); padding: 1.25rem 1.5rem; }
.drop-badge { display: inline-flex; align-items: center; font-size: 10px; font-weight: 700; text-transform: uppercase; color: #15803d; background: rgba(34,197,94,0.1); border: 1px solid rgba(34,197,94,0.2); border-radius: 999px; padding: 0.125rem 0.625rem; }
.drop-header h3 { margin: 0.75rem 0 0.25rem; font-size: 1.25rem; }
.drop-header p { margin: 0; font-size: 0.875rem; color: var(--muted); }
.drop-body { padding: 1.5rem; }
.slot-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.slot { position: relative; display: flex; flex-direction: column; padding: 1rem; border: 2px solid var(--line); border-radius: 8px; background: #fff; text-align: left; cursor: pointer; }
.slot.sold { border-style: dashed; opacity: 0.6; cursor: not-allowed; }
.slot.selected { border-color: var(--primary); background: rgba(234,88,12,0.05); }
.slot-top { display: flex; justify-content: space-between; margin-bottom: 0.75rem; }
.slot-state { font-size: 10px; font-weight: 700; text-transform: uppercase; }
.slot-radio { width: 1rem; height: 1rem; border: 1px solid #d4d4d4; border-radius: 50%; }
.slot-radio.checked { background: var(--primary); border-color: var(--primary); }
.slot.sold .slot-name { text-decoration: line-through; }
.slot-price { font-size: 0.875rem; color: var(--muted); }
.drop-actions { display: flex; justify-content: space-between; align-items: center; gap: 1rem; border-top: 1px solid var(--line); padding-top: 1.5rem; }
.drop-availability { font-size: 0.75rem; color: var(--muted); }
.drop-confirm { padding: 0.75rem 2rem; }

.browser-window { width: 100%; max-width: 56rem; margin-top: 3rem; background: #fff; border: 1px solid var(--line); border-radius: 12px; overflow: hidden; }
.browser-bar { display: flex; gap: 0.5rem; padding: 0.75rem 1rem; background: var(--soft); border-bottom: 1px solid var(--line); }
.browser-bar .dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; }
.dot.red { background: #f87171; } .dot.yellow { background: #facc15; } .dot.green { background: #4ade80; }
.browser-body { padding: 3rem; display: flex; justify-content: center; }
.browser-caption { margin-top: 1.5rem; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: #a3a3a3; }
.phone { position: relative; width: 280px; height: 500px; border: 8px solid #111827; border-radius: 2.5rem; background: #fafafa; overflow: hidden; text-align: left; }
.phone-notch { position: absolute; top: 0.5rem; left: 50%; transform: translateX(-50%); width: 6rem; height: 1.5rem; background: #000; border-radius: 999px; }
.phone-screen { padding-top: 3rem; height: 100%; display: flex; flex-direction: column; }
.phone-status { position: absolute; top: 0.75rem; left: 1.5rem; font-size: 10px; font-weight: 700; }
.wallet { padding: 0 1.25rem 1.5rem; }
.wallet-label { font-size: 0.75rem; color: #737373; }
.wallet-balance { font-size: 1.875rem; font-weight: 700; animation: scale-in 0.2s ease-out; }
@keyframes scale-in { from { transform: scale(0.95); } to { transform: scale(1); } }
.wallet-actions { display: flex; gap: 0.5rem; margin-top: 1rem; font-size: 10px; font-weight: 700; text-align: center; }
.wallet-primary { flex: 1; background: #171717; color: #fff; padding: 0.625rem; border-radius: 8px; }
.wallet-secondary { flex: 1; border: 1px solid var(--line); padding: 0.625rem; border-radius: 8px; }
.feed { flex: 1; background: rgba(245,245,245,0.5); padding: 0.5rem 1rem; overflow: hidden; }
.feed-title { display: flex; justify-content: space-between; font-size: 10px; font-weight: 700; text-transform: uppercase; color: #a3a3a3; margin: 0.5rem 0; }
.feed-item { display: flex; align-items: center; gap: 0.75rem; background: #fff; border: 1px solid var(--line); border-radius: 12px; padding: 0.75rem; margin-bottom: 0.75rem; animation: slide-in 0.4s ease-out; }
@keyframes slide-in { from { opacity: 0; transform: translateY(-10px); } to { opacity: 1; transform: none; } }
.feed-icon { width: 2rem; height: 2rem; border-radius: 50%; background: rgba(124,58,237,0.1); color: var(--creator); display: flex; align-items: center; justify-content: center; font-weight: 700; }
.feed-text { flex: 1; font-size: 0.75rem; }
.feed-source { font-weight: 700; }
.feed-amount { text-align: right; font-size: 0.75rem; font-weight: 700; color: var(--creator); }
.feed-time { font-size: 9px; color: #a3a3a3; font-weight: 400; }

.site-footer { background: var(--ink); color: #d4d4d4; padding: 4rem 1.5rem; }
.footer-content, .footer-bottom { max-width: 72rem; margin: 0 auto; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 2rem; }
.footer-logo { font-family: "Libre Baskerville", serif; font-weight: 700; font-size: 1.75rem; color: #fff; display: block; }
.footer-tagline { font-size: 0.75rem; color: #737373; text-transform: uppercase; letter-spacing: 0.2em; }
.footer-columns { display: flex; gap: 3rem; font-size: 0.875rem; }
.footer-column { display: flex; flex-direction: column; gap: 0.75rem; }
.footer-heading { font-size: 10px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.2em; color: #fff; }
.footer-column a, .footer-link { color: #a3a3a3; text-decoration: none; background: none; border: none; padding: 0; text-align: left; cursor: pointer; font-size: 0.875rem; }
.footer-column a:hover, .footer-link:hover { color: var(--primary); }
.footer-bottom { margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #262626; font-size: 10px; color: #525252; }

.modal-root { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; padding: 1rem; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(10,10,10,0.6); backdrop-filter: blur(4px); }
.modal-backdrop.dark { background: rgba(10,10,10,0.9); }
.modal-panel { position: relative; width: 100%; max-width: 42rem; max-height: 90vh; display: flex; flex-direction: column; background: #fff; border-radius: 12px; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); outline: none; }
.modal-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.5rem; border-bottom: 1px solid var(--line); }
.modal-header h2, .modal-header h3 { margin: 0; font-size: 1.25rem; }
.modal-close { background: none; border: none; font-size: 1.5rem; cursor: pointer; color: var(--muted); }
.modal-content { overflow-y: auto; padding: 1.5rem; font-size: 0.875rem; color: var(--muted); line-height: 1.6; }
.modal-content h3 { color: var(--ink); font-size: 1rem; }
.terms-updated { padding-top: 1.5rem; font-size: 0.75rem; border-top: 1px solid var(--line); }
.modal-footer { padding: 1rem; background: var(--soft); border-top: 1px solid var(--line); display: flex; justify-content: flex-end; border-radius: 0 0 12px 12px; }
.modal-primary { background: var(--ink); color: #fff; border: none; border-radius: 6px; padding: 0.5rem 1rem; cursor: pointer; }
.apply-panel { background: #0a0a0a; color: #fff; border: 1px solid #262626; overflow-y: auto; }
.modal-header.dark { border-bottom-color: #262626; }
.modal-header.dark h3 { text-transform: uppercase; }
.apply-form { padding: 1.5rem; display: flex; flex-direction: column; gap: 2rem; }
.apply-section { display: flex; flex-direction: column; gap: 1rem; }
.apply-section.divided { border-top: 1px solid #262626; padding-top: 1rem; }
.apply-section h4 { margin: 0; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--creator); }
.field-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; }
.field label { display: block; font-size: 0.75rem; color: #a3a3a3; margin-bottom: 0.25rem; }
.field input { width: 100%; box-sizing: border-box; background: #171717; border: 1px solid #262626; border-radius: 2px; padding: 0.5rem 0.75rem; color: #fff; }
.field input:focus { outline: none; border-color: var(--creator); }
.hint { font-size: 0.75rem; color: #737373; margin: 0; }
.hint.small { font-size: 10px; }
.category-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 0.75rem; }
.category { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem; border: 1px solid #262626; cursor: pointer; font-size: 0.875rem; color: #d4d4d4; }
.radio-group p { font-size: 0.875rem; color: #d4d4d4; }
.radio-row { display: flex; gap: 1rem; }
.radio { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: #a3a3a3; cursor: pointer; }
.apply-submit { width: 100%; padding: 0.75rem; text-transform: uppercase; background: var(--creator); }
.apply-error { background: rgba(239,68,68,0.1); border: 1px solid rgba(239,68,68,0.2); color: #ef4444; padding: 0.75rem; border-radius: 6px; font-size: 0.875rem; text-align: center; }
.apply-success { text-align: center; padding: 3rem 1.5rem; }
.success-mark { width: 4rem; height: 4rem; margin: 0 auto 1.5rem; border-radius: 50%; background: #171717; border: 1px solid #262626; color: #22c55e; font-size: 2rem; display: flex; align-items: center; justify-content: center; }
.apply-success p { color: #a3a3a3; font-size: 0.875rem; }
.apply-close-btn { background: #fff; color: #000; border: none; padding: 0.5rem 1.5rem; font-weight: 700; text-transform: uppercase; cursor: pointer; }

.chat-toggle { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 50; width: 3.5rem; height: 3.5rem; border-radius: 50%; border: none; background: var(--primary); color: #fff; font-size: 1.5rem; cursor: pointer; box-shadow: 0 10px 15px -3px rgba(234,88,12,0.25); transition: transform 0.3s; }
.chat-toggle.open { background: var(--ink); transform: rotate(90deg); }
.chat-window { position: fixed; bottom: 6rem; right: 1.5rem; z-index: 40; width: 90vw; max-width: 24rem; height: 500px; background: #fff; border: 1px solid var(--line); border-radius: 12px; display: flex; flex-direction: column; overflow: hidden; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); }
.chat-header { display: flex; align-items: center; gap: 0.75rem; background: var(--ink); color: #fff; padding: 1rem; }
.chat-header h3 { margin: 0; font-size: 0.875rem; }
.chat-header p { margin: 0; font-size: 0.75rem; color: #a3a3a3; }
.chat-icon { width: 2rem; height: 2rem; border-radius: 50%; background: rgba(234,88,12,0.2); color: var(--primary); display: flex; align-items: center; justify-content: center; }
.chat-messages { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 1rem; background: rgba(245,245,245,0.3); }
.chat-row { display: flex; }
.chat-row.user { justify-content: flex-end; }
.chat-bubble { max-width: 80%; padding: 0.75rem; border-radius: 8px; font-size: 0.875rem; line-height: 1.5; white-space: pre-wrap; }
.chat-row.user .chat-bubble { background: var(--primary); color: #fff; border-top-right-radius: 0; }
.chat-row.model .chat-bubble { background: #fff; border: 1px solid var(--line); border-top-left-radius: 0; }
.chat-bubble.thinking { display: flex; align-items: center; gap: 0.5rem; font-size: 0.75rem; color: var(--muted); }
.chat-bubble.thinking .spinner { border-color: rgba(234,88,12,0.3); border-top-color: var(--primary); }
.chat-input { display: flex; gap: 0.5rem; padding: 0.75rem; border-top: 1px solid var(--line); }
.chat-input input { flex: 1; padding: 0.75rem 1rem; background: var(--soft); border: 1px solid var(--line); border-radius: 6px; font-size: 0.875rem; }
.chat-input button { background: var(--primary); color: #fff; border: none; border-radius: 4px; padding: 0 0.75rem; cursor: pointer; }
"#;
