/// Static dashboard page. Charts are drawn client-side from `/api/data`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Audiobooks Growth Dashboard</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
  <style>
    :root {
      --bg: #121212;
      --card: #1e1e1e;
      --ink: #f5f5f5;
      --muted: #a7a7a7;
      --accent: #1db954;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, #0b0b0b, var(--bg) 50%, #1a2a1f 100%);
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
      padding: 32px 18px 48px;
      opacity: 0;
      transition: opacity 1s ease;
    }

    body.ready {
      opacity: 1;
    }

    h1 {
      margin: 0 0 24px;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 20px;
      display: grid;
      gap: 12px;
    }

    .card h2 {
      margin: 0;
      font-size: 1rem;
      color: var(--muted);
      text-transform: uppercase;
      letter-spacing: 0.1em;
    }

    .card-actions {
      display: flex;
      justify-content: flex-end;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      background: var(--accent);
      color: #000;
      font-weight: 600;
      cursor: pointer;
    }

    textarea {
      width: 100%;
      min-height: 90px;
      border-radius: 12px;
      border: 1px solid #333;
      background: #0f0f0f;
      color: var(--ink);
      padding: 12px;
      font: inherit;
    }

    #reply {
      white-space: pre-wrap;
      line-height: 1.5;
      color: var(--ink);
    }

    #reply[data-type="error"] {
      color: #ff6b6b;
    }
  </style>
</head>
<body>
  <h1>Audiobooks Growth Dashboard</h1>

  <section class="grid">
    <div class="card">
      <h2>Weekly listening</h2>
      <canvas id="weekly-listening"></canvas>
      <div class="card-actions"><button data-export="weekly-listening">Export PNG</button></div>
    </div>
    <div class="card">
      <h2>Free to premium</h2>
      <canvas id="free-to-premium"></canvas>
      <div class="card-actions"><button data-export="free-to-premium">Export PNG</button></div>
    </div>
    <div class="card">
      <h2>Regional growth (%)</h2>
      <canvas id="regions"></canvas>
      <div class="card-actions"><button data-export="regions">Export PNG</button></div>
    </div>
    <div class="card">
      <h2>Campaign conversion (%)</h2>
      <canvas id="campaigns"></canvas>
      <div class="card-actions"><button data-export="campaigns">Export PNG</button></div>
    </div>
    <div class="card">
      <h2>Ask the growth analyst</h2>
      <textarea id="question" placeholder="Why is France growing?"></textarea>
      <div class="card-actions"><button id="ask">Generate insight</button></div>
      <div id="reply"></div>
    </div>
  </section>

  <script>
    const days = ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun'];
    const green = '#1db954';
    const replyEl = document.getElementById('reply');

    const line = (id, label, values) => new Chart(document.getElementById(id), {
      type: 'line',
      data: { labels: days, datasets: [{ label, data: values, borderColor: green, fill: false, tension: 0.3 }] }
    });

    const bar = (id, label, labels, values) => new Chart(document.getElementById(id), {
      type: 'bar',
      data: { labels, datasets: [{ label, data: values, backgroundColor: green }] }
    });

    const render = (data) => {
      line('weekly-listening', 'Listening hours', data.weeklyListening);
      line('free-to-premium', 'Conversions', data.freeToPremium);
      bar('regions', 'Growth %', Object.keys(data.regions), Object.values(data.regions));
      const variants = Object.keys(data.campaignData);
      const rates = variants.map((name) => {
        const tally = data.campaignData[name];
        return tally.users ? Math.round((tally.conversions / tally.users) * 1000) / 10 : 0;
      });
      bar('campaigns', 'Conversion %', variants, rates);
    };

    const loadData = async () => {
      const res = await fetch('/api/data');
      if (!res.ok) {
        throw new Error('Unable to load metrics');
      }
      render(await res.json());
    };

    const ask = async () => {
      replyEl.dataset.type = '';
      replyEl.textContent = 'Thinking...';
      const message = document.getElementById('question').value;
      const res = await fetch('/api/insight', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ message })
      });
      const body = await res.json();
      replyEl.dataset.type = res.ok ? '' : 'error';
      replyEl.textContent = body.reply;
    };

    document.querySelectorAll('[data-export]').forEach((button) => {
      button.addEventListener('click', () => {
        const canvas = document.getElementById(button.dataset.export);
        const link = document.createElement('a');
        link.download = `${button.dataset.export}.png`;
        link.href = canvas.toDataURL('image/png');
        link.click();
      });
    });

    document.getElementById('ask').addEventListener('click', () => {
      ask().catch(() => {
        replyEl.dataset.type = 'error';
        replyEl.textContent = 'Error: Could not generate insight.';
      });
    });

    window.addEventListener('load', () => document.body.classList.add('ready'));
    loadData().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
