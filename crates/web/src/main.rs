use cardhunt_core::{
    is_complete, request_new_hand, request_new_task, ActiveTask, Card, Color, Rank, RngState, Suit,
};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tiny_http::{Header, Method, Response, Server, StatusCode};

const DEFAULT_ADDR: &str = "0.0.0.0:7878";

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_options(&args);
    let state = Arc::new(Mutex::new(AppState::new(options.seed)));
    info!("session seed {}", state.lock().unwrap().rng.seed());

    let server = Server::http(options.addr.as_str()).expect("start server");
    info!("card hunt server on http://{}", options.addr);
    for request in server.incoming_requests() {
        let state = state.clone();
        if let Err(err) = handle_request(request, state) {
            error!("request error: {err}");
        }
    }
}

#[derive(Debug, Clone)]
struct ServeOptions {
    addr: String,
    seed: Option<u64>,
}

fn parse_options(args: &[String]) -> ServeOptions {
    let mut options = ServeOptions {
        addr: std::env::var("CARDHUNT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
        seed: std::env::var("CARDHUNT_SEED")
            .ok()
            .and_then(|raw| raw.parse().ok()),
    };
    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--addr" => {
                if let Some(value) = args.get(idx + 1) {
                    options.addr = value.clone();
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse().ok();
                    idx += 1;
                }
            }
            other => warn!("ignoring unknown argument {other}"),
        }
        idx += 1;
    }
    options
}

struct AppState {
    rng: RngState,
    hand: Vec<Card>,
    task: Option<ActiveTask>,
    seed_override: Option<u64>,
}

impl AppState {
    fn new(seed_override: Option<u64>) -> Self {
        let rng = match seed_override {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        Self {
            rng,
            hand: Vec::new(),
            task: None,
            seed_override,
        }
    }
}

#[derive(Serialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    state: UiState,
}

#[derive(Serialize)]
struct UiState {
    task: Option<UiTask>,
    hand: Vec<UiCard>,
    completed: bool,
    seed: u64,
}

#[derive(Serialize)]
struct UiTask {
    text: String,
    params: Vec<UiParam>,
}

#[derive(Serialize)]
struct UiParam {
    name: &'static str,
    value: String,
}

#[derive(Serialize)]
struct UiCard {
    suit: Suit,
    rank: Rank,
    color: Color,
    joker: bool,
}

#[derive(Deserialize)]
struct ActionRequest {
    action: String,
}

fn handle_request(
    mut request: tiny_http::Request,
    state: Arc<Mutex<AppState>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    match (request.method(), url.as_str()) {
        (&Method::Get, "/") => {
            respond_with_file(request, web_path("index.html"), "text/html; charset=utf-8")?;
        }
        (&Method::Get, "/app.js") => {
            respond_with_file(request, web_path("app.js"), "application/javascript")?;
        }
        (&Method::Get, "/styles.css") => {
            respond_with_file(request, web_path("styles.css"), "text/css; charset=utf-8")?;
        }
        (&Method::Get, "/api/state") => {
            let guard = state.lock().unwrap();
            let response = build_response(&guard, None);
            respond_json(request, response)?;
        }
        (&Method::Post, "/api/action") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let action: ActionRequest = serde_json::from_str(&body)?;
            debug!("action {}", action.action);
            let mut guard = state.lock().unwrap();
            let err = apply_action(&mut guard, action);
            let response = build_response(&guard, err);
            respond_json(request, response)?;
        }
        _ => {
            let response = Response::empty(StatusCode(404));
            request.respond(response)?;
        }
    }
    Ok(())
}

fn web_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("web")
        .join(file)
}

// Request::respond consumes the request, so the responders take it by value.
fn respond_with_file(
    request: tiny_http::Request,
    path: PathBuf,
    content_type: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = std::fs::File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    let header = Header::from_bytes(&b"Content-Type"[..], content_type)
        .map_err(|_| "invalid content-type header")?;
    let response = Response::from_data(content).with_header(header);
    request.respond(response)?;
    Ok(())
}

fn respond_json(
    request: tiny_http::Request,
    response: ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&response)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "invalid content-type header")?;
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}

fn build_response(state: &AppState, err: Option<String>) -> ApiResponse {
    ApiResponse {
        ok: err.is_none(),
        error: err,
        state: snapshot_state(state),
    }
}

fn snapshot_state(state: &AppState) -> UiState {
    UiState {
        task: state.task.as_ref().map(snapshot_task),
        hand: state.hand.iter().map(snapshot_card).collect(),
        completed: is_complete(state.task.as_ref(), &state.hand),
        seed: state.rng.seed(),
    }
}

fn snapshot_task(task: &ActiveTask) -> UiTask {
    UiTask {
        text: task.text.clone(),
        params: task
            .params
            .iter()
            .map(|param| UiParam {
                name: param.name,
                value: param.value.render(),
            })
            .collect(),
    }
}

fn snapshot_card(card: &Card) -> UiCard {
    UiCard {
        suit: card.suit,
        rank: card.rank,
        color: card.color(),
        joker: card.is_joker(),
    }
}

fn apply_action(state: &mut AppState, req: ActionRequest) -> Option<String> {
    match req.action.as_str() {
        "deal" => {
            state.hand = request_new_hand(&mut state.rng);
            None
        }
        "new_task" => {
            // Accepting a new mission clears whatever was dealt for
            // the previous one.
            state.hand.clear();
            state.task = Some(request_new_task(&mut state.rng));
            None
        }
        "reset" => {
            *state = AppState::new(state.seed_override);
            None
        }
        _ => Some("unknown action".to_string()),
    }
}
