use crate::models::Dataset;

pub fn render_index(date: &str, activities: &[String], data: &Dataset) -> String {
    let rows = activities
        .iter()
        .map(|activity| {
            let checked = data
                .record(activity, date)
                .is_some_and(|record| record.status);
            format!(
                "<label class=\"habit\"><input type=\"checkbox\" name=\"{activity}\"{checked} /><span>{activity}</span></label>\n",
                checked = if checked { " checked" } else { "" },
            )
        })
        .collect::<String>();

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{HABITS}}", &rows)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Habit Tracker</title>
  <style>
    :root {
      --bg-1: #eef4f8;
      --bg-2: #cfe3ef;
      --ink: #22303a;
      --accent: #0e8f76;
      --accent-2: #274a63;
      --miss: #b8522f;
      --card: #ffffff;
      --line: rgba(39, 74, 99, 0.12);
      --shadow: 0 18px 48px rgba(39, 74, 99, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-2), var(--bg-1) 55%);
      color: var(--ink);
      font-family: "Avenir Next", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 56px;
    }

    .app {
      width: min(760px, 100%);
      display: grid;
      gap: 22px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      color: var(--accent-2);
    }

    header .today {
      margin: 4px 0 0;
      color: #5c6e7b;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
      color: var(--accent-2);
    }

    .habits {
      display: grid;
      gap: 10px;
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 10px 14px;
      border: 1px solid var(--line);
      border-radius: 12px;
      cursor: pointer;
    }

    .habit input {
      width: 18px;
      height: 18px;
      accent-color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      justify-self: start;
    }

    button:active {
      transform: scale(0.98);
    }

    .report-row {
      display: grid;
      grid-template-columns: 130px 1fr auto;
      align-items: center;
      gap: 12px;
      font-size: 0.95rem;
    }

    .report-row .name {
      font-weight: 600;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: rgba(39, 74, 99, 0.1);
      overflow: hidden;
    }

    .bar i {
      display: block;
      height: 100%;
      background: var(--accent);
    }

    .report-row .figures {
      color: #5c6e7b;
      white-space: nowrap;
    }

    .lookup {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    .lookup input {
      padding: 10px 12px;
      border: 1px solid var(--line);
      border-radius: 10px;
      font-size: 1rem;
    }

    .history-entry {
      display: grid;
      grid-template-columns: 130px auto auto;
      gap: 12px;
      font-size: 0.95rem;
    }

    .history-entry .done {
      color: var(--accent);
      font-weight: 600;
    }

    .history-entry .missed {
      color: var(--miss);
      font-weight: 600;
    }

    .history-entry .at {
      color: #5c6e7b;
    }

    .empty {
      color: #5c6e7b;
      font-style: italic;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: #5c6e7b;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Habit Tracker</h1>
      <p class="today">Today: <span id="date">{{DATE}}</span></p>
    </header>

    <section class="card">
      <h2>Today's Activities</h2>
      <form id="habit-form" method="post" action="/submit">
        <div class="habits" id="habits">
{{HABITS}}
        </div>
        <p class="status" id="status"></p>
        <button type="submit">Submit</button>
      </form>
    </section>

    <section class="card">
      <h2>Weekly Report</h2>
      <p class="today" id="report-range"></p>
      <div id="report"></div>
    </section>

    <section class="card">
      <h2>Activity History by Date</h2>
      <div class="lookup">
        <input id="history-date" placeholder="YYYY-MM-DD" maxlength="10" />
        <button type="button" id="history-btn">Search</button>
      </div>
      <div id="history"></div>
    </section>
  </main>

  <script>
    const form = document.getElementById('habit-form');
    const statusEl = document.getElementById('status');
    const reportEl = document.getElementById('report');
    const reportRangeEl = document.getElementById('report-range');
    const historyEl = document.getElementById('history');
    const historyDateEl = document.getElementById('history-date');
    const historyBtn = document.getElementById('history-btn');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const checkboxStates = () => {
      const statuses = {};
      form.querySelectorAll('input[type="checkbox"]').forEach((box) => {
        statuses[box.name] = box.checked;
      });
      return statuses;
    };

    const renderReport = (report) => {
      reportRangeEl.textContent = `${report.start_date} to ${report.end_date}`;
      const names = Object.keys(report.activities);
      if (!names.length) {
        reportEl.innerHTML = '<p class="empty">Nothing recorded yet.</p>';
        return;
      }
      reportEl.innerHTML = names
        .map((name) => {
          const s = report.activities[name];
          const pct = s.percentage.toFixed(2);
          return `<div class="report-row">
            <span class="name">${name}</span>
            <span class="bar"><i style="width:${pct}%"></i></span>
            <span class="figures">${s.completed}/7 days (${pct}%) &middot; streak ${s.streak}</span>
          </div>`;
        })
        .join('');
    };

    const renderHistory = (history) => {
      if (!history.entries.length) {
        historyEl.innerHTML = '<p class="empty">No records found for the selected date.</p>';
        return;
      }
      historyEl.innerHTML = history.entries
        .map(
          (entry) => `<div class="history-entry">
            <span>${entry.activity}</span>
            <span class="${entry.status ? 'done' : 'missed'}">${entry.status ? 'Completed' : 'Not Completed'}</span>
            <span class="at">at ${entry.time}</span>
          </div>`
        )
        .join('');
    };

    const loadReport = async () => {
      const res = await fetch('/api/report');
      if (!res.ok) {
        throw new Error('Unable to load the weekly report');
      }
      renderReport(await res.json());
    };

    const submit = async () => {
      setStatus('Saving...', '');
      const res = await fetch('/api/submit', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ statuses: checkboxStates() })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      await res.json();
      setStatus("Today's progress has been saved!", 'ok');
      loadReport().catch((err) => setStatus(err.message, 'error'));
    };

    const searchHistory = async () => {
      const date = historyDateEl.value.trim();
      if (!/^\d{4}-\d{2}-\d{2}$/.test(date)) {
        historyEl.innerHTML = '<p class="empty">Enter a date as YYYY-MM-DD.</p>';
        return;
      }
      const res = await fetch(`/api/history?date=${encodeURIComponent(date)}`);
      if (!res.ok) {
        historyEl.innerHTML = `<p class="empty">${await res.text()}</p>`;
        return;
      }
      renderHistory(await res.json());
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      submit().catch((err) => setStatus(err.message, 'error'));
    });

    historyBtn.addEventListener('click', () => {
      searchHistory().catch(() => {
        historyEl.innerHTML = '<p class="empty">History lookup failed.</p>';
      });
    });

    loadReport().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
