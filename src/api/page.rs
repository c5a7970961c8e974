//! The widget page served at `/`

use crate::state::constants::{DAILY_GOAL_ML, DEFAULT_CUSTOM_AMOUNT_ML};

pub fn render_index() -> String {
    INDEX_HTML
        .replace("{{GOAL}}", &DAILY_GOAL_ML.to_string())
        .replace("{{CUSTOM}}", &DEFAULT_CUSTOM_AMOUNT_ML.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Hidrate-se</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      font-family: system-ui, sans-serif;
      background: #eef6fc;
      color: #1f2937;
    }

    .card {
      width: min(420px, 92vw);
      background: #fff;
      border-radius: 14px;
      box-shadow: 0 12px 32px rgba(37, 99, 235, 0.15);
      padding: 24px;
      display: grid;
      gap: 20px;
    }

    .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 8px;
    }

    h2 { margin: 0; color: #2563eb; }
    .muted { color: #6b7280; font-size: 0.9rem; }
    .time { font-size: 1.8rem; font-weight: 700; }
    progress { width: 100%; height: 8px; }
    button { cursor: pointer; border: 1px solid #cbd5e1; background: #fff; border-radius: 8px; padding: 6px 10px; }
    button.primary { background: #2563eb; color: #fff; border: none; flex-grow: 1; }
    input { width: 80px; padding: 6px; }

    #toasts {
      position: fixed;
      top: 16px;
      left: 50%;
      transform: translateX(-50%);
      display: grid;
      gap: 8px;
    }

    .toast { background: #fff; border-radius: 8px; padding: 10px 14px; box-shadow: 0 4px 14px rgba(0, 0, 0, 0.12); }
    .toast.error { border-left: 4px solid #dc2626; }
    .toast.success { border-left: 4px solid #16a34a; }
  </style>
</head>
<body>
  <div id="toasts"></div>
  <div class="card">
    <div class="row">
      <h2>Hidrate-se</h2>
      <button data-post="/notifications/permission" title="Ativar notificações">🔔</button>
    </div>

    <div>
      <div class="row">
        <span class="muted">Próximo lembrete</span>
        <span>
          <button data-post="/interval/decrease">−</button>
          <span id="interval">60min</span>
          <button data-post="/interval/increase">+</button>
        </span>
      </div>
      <progress id="countdown-progress" max="100" value="100"></progress>
      <div class="row">
        <span class="time" id="time-left">60:00</span>
        <span>
          <button data-post="/timer/toggle" id="toggle">▶</button>
          <button data-post="/timer/reset">↺</button>
          <button data-post="/sound/test">♪</button>
        </span>
      </div>
    </div>

    <div>
      <div class="row">
        <span class="muted">Água consumida</span>
        <span id="consumed">0 / {{GOAL}}ml</span>
      </div>
      <progress id="intake-progress" max="100" value="0"></progress>
    </div>

    <div class="row">
      <input type="number" id="custom" min="1" value="{{CUSTOM}}" />
      <span>ml</span>
      <button class="primary" id="add-water">💧 Adicionar água</button>
    </div>
  </div>

  <script>
    const seen = new Set();

    async function send(method, path, body) {
      const res = await fetch(path, {
        method,
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(body ?? {}),
      });
      if (res.ok) {
        render((await res.json()).reminder);
      }
    }

    function render(s) {
      document.getElementById("interval").textContent = `${s.interval_minutes}min`;
      document.getElementById("time-left").textContent = s.time_left_display;
      document.getElementById("countdown-progress").value = s.countdown_progress_pct;
      document.getElementById("toggle").textContent = s.running ? "⏸" : "▶";
      document.getElementById("consumed").textContent = `${s.consumed_ml} / ${s.daily_goal_ml}ml`;
      document.getElementById("intake-progress").value = s.intake_progress_pct;
      const custom = document.getElementById("custom");
      if (document.activeElement !== custom) {
        custom.value = s.custom_amount_ml;
      }
      s.toasts.forEach(showToast);
    }

    function showToast(toast) {
      if (seen.has(toast.id)) return;
      seen.add(toast.id);
      const el = document.createElement("div");
      el.className = `toast ${toast.kind}`;
      el.textContent = `${toast.icon ?? ""} ${toast.message}`.trim();
      document.getElementById("toasts").appendChild(el);
      const ttl = Math.max(0, new Date(toast.expires_at) - new Date());
      setTimeout(() => el.remove(), ttl);
    }

    document.querySelectorAll("[data-post]").forEach((button) => {
      button.addEventListener("click", () => send("POST", button.dataset.post));
    });

    document.getElementById("custom").addEventListener("change", (e) => {
      send("PUT", "/water/custom", { amount: e.target.value });
    });

    document.getElementById("add-water").addEventListener("click", () => send("POST", "/water"));

    const events = new EventSource("/events");
    events.addEventListener("snapshot", (e) => render(JSON.parse(e.data)));
  </script>
</body>
</html>
"#;
