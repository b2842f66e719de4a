use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::scoreboard::{Match, Side};
use crate::service::ScoreboardService;

#[derive(Clone)]
pub struct AppState {
    pub service: ScoreboardService,
}

/// Ranked scoreboard as served to the dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub matches: Vec<Match>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub side: Side,
}

#[derive(Debug, Deserialize)]
pub struct AddPointsRequest {
    pub side: Side,
    pub points: u32,
}

type ApiError = (StatusCode, String);

fn unknown_match(id: &str) -> ApiError {
    (StatusCode::NOT_FOUND, format!("No match in progress with id {}", id))
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/matches", post(start_game_handler))
        .route("/api/matches/:id", delete(finish_game_handler))
        .route("/api/matches/:id/score", post(score_handler))
        .route("/api/matches/:id/points", post(add_points_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/summary
async fn summary_handler(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        matches: state.service.summary(),
        updated_at: Utc::now(),
    })
}

/// POST /api/matches  {"home": "...", "away": "..."}
async fn start_game_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartGameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .service
        .start_game(&req.home, &req.away)
        .map(|m| (StatusCode::CREATED, Json(m)))
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
}

/// POST /api/matches/:id/score  {"side": "home"}
async fn score_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<Match>, ApiError> {
    state
        .service
        .score(&id, req.side)
        .map(Json)
        .ok_or_else(|| unknown_match(&id))
}

/// POST /api/matches/:id/points  {"side": "away", "points": 3}
async fn add_points_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AddPointsRequest>,
) -> Result<Json<Match>, ApiError> {
    state
        .service
        .add_points(&id, req.side, req.points)
        .map(Json)
        .ok_or_else(|| unknown_match(&id))
}

/// DELETE /api/matches/:id
async fn finish_game_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Match>, ApiError> {
    state
        .service
        .finish_game(&id)
        .map(Json)
        .ok_or_else(|| unknown_match(&id))
}

/// Embedded single-file dashboard (HTML + CSS + JS)
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Live Scoreboard</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  main { padding: 1.5rem 2rem; display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  form.panel { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
  .fields { display: flex; gap: .8rem; }
  .field { display: flex; flex-direction: column; gap: .3rem; }
  label { color: var(--muted); font-size: .8rem; font-weight: 600; text-transform: uppercase; }
  input { background: var(--bg); border: 1px solid var(--border); border-radius: 6px; color: var(--text); padding: .4rem .6rem; }
  button { background: none; border: 1px solid var(--border); color: var(--text); padding: .35rem .8rem; border-radius: 6px; cursor: pointer; font-size: .85rem; }
  button:hover { border-color: var(--accent); color: var(--accent); }
  #game-summary { display: flex; flex-direction: column; gap: 1rem; min-width: 360px; }
  .game { display: grid; grid-template-columns: repeat(5, 1fr); grid-template-rows: auto auto; gap: .5rem; text-align: center; }
  .game .score { font-size: 1.4rem; font-weight: 700; }
  .game .finish { grid-column-start: 3; }
  .game .away-add { grid-column-start: 5; }
  .empty { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; }
</style>
</head>
<body>
<header>
  <h1>Live Scoreboard</h1>
  <span style="margin-left:auto;color:var(--muted);font-size:.8rem;" id="last-updated"></span>
</header>

<main>
  <form class="panel" id="new-game">
    <div class="fields">
      <div class="field"><label for="home">Home</label><input name="home" id="home" type="text" placeholder="Team name"></div>
      <div class="field"><label for="away">Away</label><input name="away" id="away" type="text" placeholder="Team name"></div>
    </div>
    <button type="submit">Add Game</button>
  </form>
  <div id="game-summary"><div class="empty">Loading…</div></div>
</main>

<script>
const esc = s => String(s).replace(/[&<>"']/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));

async function send(method, url, body) {
  const r = await fetch(url, {
    method,
    headers: body ? { 'Content-Type': 'application/json' } : {},
    body: body ? JSON.stringify(body) : undefined,
  });
  if (!r.ok) alert(await r.text());
  await loadSummary();
}

async function loadSummary() {
  const r = await fetch('/api/summary');
  if (!r.ok) return;
  const s = await r.json();
  const el = document.getElementById('game-summary');
  if (!s.matches.length) {
    el.innerHTML = '<div class="empty">No games in progress</div>';
  } else {
    el.innerHTML = s.matches.map(g => `<div class="panel game" data-id="${esc(g.id)}">
      <span>${esc(g.home.name)}</span>
      <span class="score">${g.home.score}</span>
      <span>-</span>
      <span class="score">${g.away.score}</span>
      <span>${esc(g.away.name)}</span>
      <button data-testid="home-add" data-side="home">+</button>
      <button class="finish">Finish game</button>
      <button data-testid="away-add" data-side="away" class="away-add">+</button>
    </div>`).join('');
  }
  document.getElementById('last-updated').textContent = 'Updated ' + new Date(s.updated_at).toLocaleTimeString();
}

document.getElementById('game-summary').addEventListener('click', e => {
  const btn = e.target.closest('button');
  if (!btn) return;
  const id = encodeURIComponent(btn.closest('.game').dataset.id);
  if (btn.dataset.side) send('POST', `/api/matches/${id}/score`, { side: btn.dataset.side });
  else send('DELETE', `/api/matches/${id}`);
});

document.getElementById('new-game').addEventListener('submit', async e => {
  e.preventDefault();
  const home = e.currentTarget.elements.namedItem('home');
  const away = e.currentTarget.elements.namedItem('away');
  const r = await fetch('/api/matches', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ home: home.value, away: away.value }),
  });
  if (!r.ok) { alert(await r.text()); return; }
  home.value = '';
  away.value = '';
  await loadSummary();
});

loadSummary();
setInterval(loadSummary, 5000);
</script>
</body>
</html>"#;
