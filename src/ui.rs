use crate::models::StatsResponse;

pub fn render_index(stats: &StatsResponse) -> Result<String, serde_json::Error> {
    let initial = serde_json::to_string(stats)?;
    Ok(INDEX_HTML
        .replace("{{COUNT}}", &stats.count.to_string())
        .replace("{{TOTAL_CLICKS}}", &stats.total_clicks.to_string())
        .replace("{{MAX_VALUE}}", &stats.max_value.to_string())
        .replace("{{MIN_VALUE}}", &stats.min_value.to_string())
        .replace("{{TONE}}", &stats.tone)
        .replace("{{INITIAL}}", &initial))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Counter Widget</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --positive: #2d7a4b;
      --negative: #c63b2b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(680px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .counter-card {
      background: white;
      border-radius: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 28px;
      display: grid;
      place-items: center;
    }

    #counter {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(3.4rem, 9vw, 5rem);
      font-weight: 600;
      line-height: 1;
    }

    #counter.positive {
      color: var(--positive);
    }

    #counter.negative {
      color: var(--negative);
    }

    #counter.neutral {
      color: var(--accent-2);
    }

    #counter.pulse {
      animation: pulse 300ms ease;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease, filter 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button.pressed {
      transform: scale(0.95);
      filter: brightness(0.88);
    }

    .btn-increment {
      background: var(--positive);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 122, 75, 0.3);
    }

    .btn-decrement {
      background: var(--negative);
      color: white;
      box-shadow: 0 10px 24px rgba(198, 59, 43, 0.3);
    }

    .btn-reset {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .floating-text {
      position: fixed;
      font-size: 1.6rem;
      font-weight: 600;
      pointer-events: none;
      opacity: 1;
      transform: translateY(0);
      transition: transform 1000ms ease-out, opacity 1000ms ease-out;
    }

    .floating-text.positive {
      color: var(--positive);
    }

    .floating-text.negative {
      color: var(--negative);
    }

    .floating-text.accent {
      color: var(--accent);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes pulse {
      from {
        transform: scale(1.25);
      }
      to {
        transform: scale(1);
      }
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Counter Widget</h1>
      <p class="subtitle">Click the buttons or use the keyboard to move the count.</p>
    </header>

    <section class="counter-card">
      <span id="counter" class="{{TONE}}">{{COUNT}}</span>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Total clicks</span>
        <span id="total-clicks" class="value">{{TOTAL_CLICKS}}</span>
      </div>
      <div class="stat">
        <span class="label">Max value</span>
        <span id="max-value" class="value">{{MAX_VALUE}}</span>
      </div>
      <div class="stat">
        <span class="label">Min value</span>
        <span id="min-value" class="value">{{MIN_VALUE}}</span>
      </div>
    </section>

    <section class="actions">
      <form id="increment-form" method="post" action="/click/increment">
        <button class="btn-increment" id="increment-btn" type="submit">Increment +1</button>
      </form>
      <form id="decrement-form" method="post" action="/click/decrement">
        <button class="btn-decrement" id="decrement-btn" type="submit">Decrement -1</button>
      </form>
      <form id="reset-form" method="post" action="/click/reset">
        <button class="btn-reset" id="reset-btn" type="submit">Reset</button>
      </form>
    </section>

    <p class="hint">Shortcuts: ArrowUp or + to increment, ArrowDown or - to decrement, Ctrl+R or Cmd+R to reset.</p>
  </main>

  <script>
    const INITIAL = {{INITIAL}};

    class CounterWidget {
      constructor(initial) {
        this.stats = {
          count: initial.count,
          totalClicks: initial.total_clicks,
          maxValue: initial.max_value,
          minValue: initial.min_value
        };
        this.tone = initial.tone;
        this.pressTokens = new Map();
        this.initializeElements();
        this.bindEvents();
        this.syncDisplay();
      }

      initializeElements() {
        this.counterDisplay = document.getElementById('counter');
        this.totalClicksDisplay = document.getElementById('total-clicks');
        this.maxValueDisplay = document.getElementById('max-value');
        this.minValueDisplay = document.getElementById('min-value');
        this.incrementBtn = document.getElementById('increment-btn');
        this.decrementBtn = document.getElementById('decrement-btn');
        this.resetBtn = document.getElementById('reset-btn');
      }

      bindEvents() {
        document.getElementById('increment-form').addEventListener('submit', (event) => {
          event.preventDefault();
          this.send('increment');
        });
        document.getElementById('decrement-form').addEventListener('submit', (event) => {
          event.preventDefault();
          this.send('decrement');
        });
        document.getElementById('reset-form').addEventListener('submit', (event) => {
          event.preventDefault();
          this.send('reset');
        });
        document.addEventListener('keydown', (event) => this.handleKey(event));
      }

      handleKey(event) {
        const alwaysBound = ['ArrowUp', '+', 'ArrowDown', '-'].includes(event.key);
        const resetCombo =
          (event.key === 'r' || event.key === 'R') && (event.ctrlKey || event.metaKey);
        if (!alwaysBound && !resetCombo) {
          return;
        }
        event.preventDefault();
        fetch('/api/key', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            key: event.key,
            ctrl_key: event.ctrlKey,
            meta_key: event.metaKey
          })
        })
          .then((res) => (res.status === 204 ? null : res.json()))
          .then((data) => {
            if (data) {
              this.applyResponse(data);
            }
          })
          .catch((err) => console.error('key request failed:', err));
      }

      send(action) {
        fetch('/api/click', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ action })
        })
          .then((res) => {
            if (!res.ok) {
              throw new Error('request failed');
            }
            return res.json();
          })
          .then((data) => this.applyResponse(data))
          .catch((err) => console.error('click request failed:', err));
      }

      applyResponse(data) {
        this.stats = {
          count: data.count,
          totalClicks: data.total_clicks,
          maxValue: data.max_value,
          minValue: data.min_value
        };
        this.tone = data.tone;
        this.syncDisplay();
        this.animateButton(this.buttonFor(data.action));
        this.pulseCounter();
        this.spawnFloatingText(data.feedback, data.action);
      }

      buttonFor(action) {
        if (action === 'increment') {
          return this.incrementBtn;
        }
        if (action === 'decrement') {
          return this.decrementBtn;
        }
        return this.resetBtn;
      }

      syncDisplay() {
        this.counterDisplay.textContent = this.stats.count;
        this.counterDisplay.classList.remove('positive', 'negative', 'neutral');
        this.counterDisplay.classList.add(this.tone);
        this.totalClicksDisplay.textContent = this.stats.totalClicks;
        this.maxValueDisplay.textContent = this.stats.maxValue;
        this.minValueDisplay.textContent = this.stats.minValue;
        this.decrementBtn.disabled = false;
      }

      animateButton(button) {
        const token = (this.pressTokens.get(button) || 0) + 1;
        this.pressTokens.set(button, token);
        button.classList.add('pressed');
        setTimeout(() => {
          if (this.pressTokens.get(button) === token) {
            button.classList.remove('pressed');
          }
        }, 150);
      }

      pulseCounter() {
        this.counterDisplay.classList.remove('pulse');
        void this.counterDisplay.offsetHeight; // force reflow so the animation restarts
        this.counterDisplay.classList.add('pulse');
      }

      spawnFloatingText(text, action) {
        const toneClass =
          action === 'increment' ? 'positive' : action === 'decrement' ? 'negative' : 'accent';
        const floating = document.createElement('div');
        floating.textContent = text;
        floating.className = `floating-text ${toneClass}`;
        const rect = this.counterDisplay.getBoundingClientRect();
        floating.style.left = `${rect.left + rect.width / 2 - 20}px`;
        floating.style.top = `${rect.top - 30}px`;
        document.body.appendChild(floating);
        setTimeout(() => {
          floating.style.transform = 'translateY(-50px)';
          floating.style.opacity = '0';
        }, 100);
        setTimeout(() => {
          floating.remove();
        }, 1100);
      }

      getStats() {
        return { ...this.stats };
      }
    }

    let widget = null;
    window.getCounterWidget = () => widget;

    document.addEventListener('DOMContentLoaded', () => {
      widget = new CounterWidget(INITIAL);
      console.log('Counter widget loaded');
      console.log('Shortcuts: ArrowUp/+ increment, ArrowDown/- decrement, Ctrl+R or Cmd+R reset');
    });
  </script>
</body>
</html>
"#;
