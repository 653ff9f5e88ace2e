//! The single dashboard page
//!
//! The page holds no logic of its own: it fetches `/api/layout` for the first paint, then
//! posts every map click and dropdown change to `/api/events` and paints the updates it
//! gets back onto the element with the matching view id.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>KivaExplore</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { padding: 1.5rem; }
    #table tbody tr { cursor: pointer; }
    .panel-img { max-width: 100%; }
  </style>
</head>
<body>
  <div class="container-fluid">
    <h1 id="title"></h1>
    <h4 id="subtitle" class="text-muted"></h4>
    <div class="row my-3">
      <div class="col-md-4">
        <select id="metric" class="form-select"></select>
      </div>
    </div>
    <div id="Choropleth"></div>
    <div class="row">
      <div class="col-md-6">
        <table id="table" class="table table-sm">
          <thead></thead>
          <tbody></tbody>
        </table>
      </div>
      <div class="col-md-6">
        <h3 id="SubplotHeader"></h3>
        <a id="URL" target="_blank" rel="noopener"></a>
        <div id="Scatter"></div>
        <div class="row">
          <div class="col-6"><img id="Image" class="panel-img" alt=""></div>
          <div class="col-6"><img id="Wordcloud" class="panel-img" alt=""></div>
        </div>
        <div id="GenderBreakdown"></div>
        <div id="SectorBreakdown"></div>
      </div>
    </div>
  </div>
<script>
"use strict";

function fmt(value) {
  return value === null || value === undefined ? "" : String(value);
}

function buildTable(table) {
  const head = document.querySelector("#table thead");
  const body = document.querySelector("#table tbody");
  head.innerHTML = "<tr>" + table.columns.map(c => "<th>" + c + "</th>").join("") + "</tr>";
  body.innerHTML = "";
  table.rows.forEach(row => {
    const tr = document.createElement("tr");
    table.columns.forEach(c => {
      const td = document.createElement("td");
      td.textContent = fmt(row[c]);
      tr.appendChild(td);
    });
    tr.addEventListener("click", () => send({ kind: "map_clicked", iso: row.ISO }));
    body.appendChild(tr);
  });
}

function applyRowStyles(styles) {
  const rows = document.querySelectorAll("#table tbody tr");
  rows.forEach(tr => { tr.style.backgroundColor = ""; tr.style.color = ""; });
  styles.forEach(style => {
    const tr = rows[style.if.row_index];
    if (tr) {
      tr.style.backgroundColor = style.backgroundColor;
      tr.style.color = style.color;
    }
  });
}

function apply(update) {
  const el = document.getElementById(update.view);
  const art = update.artifact;
  if (update.view === "table") {
    applyRowStyles(art.kind === "row_styles" ? art.styles : []);
    return;
  }
  if (!el) {
    return;
  }
  switch (art.kind) {
    case "figure":
      Plotly.react(el, art.data, art.layout);
      if (update.view === "Choropleth" && !el.dataset.bound) {
        el.dataset.bound = "1";
        el.on("plotly_click", ev => {
          const point = ev.points && ev.points[0];
          if (point && point.location) {
            send({ kind: "map_clicked", iso: point.location });
          }
        });
      }
      break;
    case "text":
      el.textContent = art.text;
      break;
    case "link":
      el.textContent = art.text;
      el.href = art.href;
      break;
    case "image":
      el.src = art.src;
      el.alt = art.image_kind;
      break;
    default:
      if (el.tagName === "IMG") {
        el.removeAttribute("src");
      } else if (el.tagName === "A") {
        el.textContent = "";
        el.removeAttribute("href");
      } else if (el.classList.contains("js-plotly-plot")) {
        Plotly.purge(el);
      } else {
        el.textContent = "";
      }
  }
}

async function send(event) {
  const res = await fetch("/api/events", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(event),
  });
  const body = await res.json();
  if (!res.ok) {
    console.warn(body.error);
    return;
  }
  document.getElementById("metric").value = body.state.metric;
  body.updates.forEach(apply);
}

async function init() {
  const layout = await (await fetch("/api/layout")).json();
  document.getElementById("title").textContent = layout.title;
  document.getElementById("subtitle").textContent = layout.subtitle;
  const select = document.getElementById("metric");
  layout.metrics.forEach(m => select.add(new Option(m.label, m.value)));
  select.value = layout.state.metric;
  select.addEventListener("change", () => send({ kind: "metric_changed", metric: select.value }));
  buildTable(layout.table);
  layout.views.forEach(apply);
}

init();
</script>
</body>
</html>
"##;
