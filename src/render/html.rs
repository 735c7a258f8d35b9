use crate::render::ReportData;

/// Render a self-contained HTML report (data embedded as JSON, charts drawn as SVG).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    // "</" inside a string literal would end the <script> element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Search benchmark report</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  main { padding: 12px 16px; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .charts { display: flex; gap: 24px; flex-wrap: wrap; }
  .muted { color: #777; font-size: 12px; }

  svg text { font-size: 12px; fill: #333; }
  svg .title { font-size: 16px; font-weight: 600; }
  svg .grid { stroke: #e5e5e5; }
  svg .axis { stroke: #444; }

  table { border-collapse: collapse; margin-top: 16px; }
  th, td { border-bottom: 1px solid #eee; padding: 6px 8px; text-align: left; font-size: 14px; }
  th { background: white; border-bottom: 1px solid #ddd; }
  .num { text-align: right; font-variant-numeric: tabular-nums; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<main>
  <div class="charts" id="charts"></div>

  <table id="blocks">
    <thead>
      <tr>
        <th class="num">size</th>
        <th class="num">linear</th>
        <th class="num">binary</th>
        <th class="num">rb</th>
        <th class="num">hash</th>
        <th class="num">multimap</th>
        <th class="num">collisions</th>
      </tr>
    </thead>
    <tbody id="blocksBody"></tbody>
  </table>
</main>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const W = 640, H = 420;
const M = { top: 40, right: 120, bottom: 50, left: 80 };
const SVG_NS = "http://www.w3.org/2000/svg";

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function fmtNum(x) {
  if (x === 0) return "0";
  const a = Math.abs(x);
  return (a >= 1e5 || a < 1e-3) ? x.toExponential(1) : String(+x.toPrecision(4));
}

function el(name, attrs, text) {
  const e = document.createElementNS(SVG_NS, name);
  for (const [k, v] of Object.entries(attrs || {})) e.setAttribute(k, v);
  if (text !== undefined) e.textContent = text;
  return e;
}

// Map a data value into [0, 1] along an axis.
function axis(scale, values) {
  const f = scale === "log" ? Math.log10 : (v) => v;
  let lo = Math.min(...values.map(f)), hi = Math.max(...values.map(f));
  if (scale === "log") { lo = Math.floor(lo); hi = Math.ceil(hi); }
  else { lo = Math.min(lo, 0); }
  if (!isFinite(lo) || !isFinite(hi)) { lo = 0; hi = 1; }
  if (hi === lo) hi = lo + 1;

  let ticks = [];
  if (scale === "log") {
    for (let p = lo; p <= hi; p++) ticks.push(Math.pow(10, p));
  } else {
    const step = Math.pow(10, Math.floor(Math.log10((hi - lo) / 5)));
    const nice = [1, 2, 5, 10].map((m) => m * step).find((s) => (hi - lo) / s <= 6);
    for (let t = Math.ceil(lo / nice) * nice; t <= hi + 1e-12; t += nice) ticks.push(t);
  }
  return { pos: (v) => (f(v) - lo) / (hi - lo), ticks };
}

function renderChart(chart) {
  const pts = chart.series.flatMap((s) => s.points);
  const xs = axis(chart.x_scale, pts.map((p) => p[0]));
  const ys = axis(chart.y_scale, pts.map((p) => p[1]));
  const iw = W - M.left - M.right, ih = H - M.top - M.bottom;
  const px = (v) => M.left + xs.pos(v) * iw;
  const py = (v) => M.top + (1 - ys.pos(v)) * ih;

  const svg = el("svg", { width: W, height: H, viewBox: `0 0 ${W} ${H}`, id: chart.id });
  svg.appendChild(el("text", { x: M.left, y: 24, class: "title" }, chart.title));

  for (const t of xs.ticks) {
    svg.appendChild(el("line", { x1: px(t), x2: px(t), y1: M.top, y2: M.top + ih, class: "grid" }));
    svg.appendChild(el("text", { x: px(t), y: M.top + ih + 18, "text-anchor": "middle" }, fmtNum(t)));
  }
  for (const t of ys.ticks) {
    svg.appendChild(el("line", { x1: M.left, x2: M.left + iw, y1: py(t), y2: py(t), class: "grid" }));
    svg.appendChild(el("text", { x: M.left - 6, y: py(t) + 4, "text-anchor": "end" }, fmtNum(t)));
  }
  svg.appendChild(el("line", { x1: M.left, x2: M.left + iw, y1: M.top + ih, y2: M.top + ih, class: "axis" }));
  svg.appendChild(el("line", { x1: M.left, x2: M.left, y1: M.top, y2: M.top + ih, class: "axis" }));
  svg.appendChild(el("text", { x: M.left + iw / 2, y: H - 10, "text-anchor": "middle" }, chart.x_label));
  svg.appendChild(el("text", {
    x: 16, y: M.top + ih / 2, "text-anchor": "middle",
    transform: `rotate(-90 16 ${M.top + ih / 2})`,
  }, chart.y_label));

  chart.series.forEach((s, i) => {
    const d = s.points.map((p) => `${px(p[0])},${py(p[1])}`).join(" ");
    svg.appendChild(el("polyline", { points: d, fill: "none", stroke: s.color, "stroke-width": 2 }));
    for (const p of s.points) {
      const c = el("circle", { cx: px(p[0]), cy: py(p[1]), r: 3, fill: s.color });
      c.appendChild(el("title", {}, `${s.label}: size ${p[0]}, ${fmtNum(p[1])}`));
      svg.appendChild(c);
    }
    const ly = M.top + 10 + i * 18;
    svg.appendChild(el("line", { x1: W - M.right + 12, x2: W - M.right + 32, y1: ly, y2: ly, stroke: s.color, "stroke-width": 2 }));
    svg.appendChild(el("text", { x: W - M.right + 38, y: ly + 4 }, s.label));
  });

  return svg;
}

function renderSummary() {
  const sizes = DATA.blocks.map((b) => b.size);
  document.getElementById("summary").innerHTML = `
    <span class="pill">log: <b>${escapeHtml(DATA.source)}</b></span>
    <span class="pill">dataset sizes: <b>${DATA.blocks.length}</b></span>
    <span class="pill">range: <b>${sizes.length ? `${Math.min(...sizes)} to ${Math.max(...sizes)}` : "n/a"}</b></span>
  `;
}

function renderBlocks() {
  const body = document.getElementById("blocksBody");
  for (const b of DATA.blocks) {
    const tr = document.createElement("tr");
    tr.innerHTML = [b.size, b.linear, b.bst, b.rb_tree, b.hash, b.multimap, b.collisions]
      .map((v, i) => `<td class="num">${i === 0 || i === 6 ? v : fmtNum(v)}</td>`)
      .join("");
    body.appendChild(tr);
  }
}

renderSummary();
const charts = document.getElementById("charts");
if (DATA.blocks.length === 0) {
  charts.innerHTML = `<p class="muted">No dataset blocks in log.</p>`;
} else {
  for (const c of DATA.charts) charts.appendChild(renderChart(c));
}
renderBlocks();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
