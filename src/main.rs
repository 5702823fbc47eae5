//! dialog-gate - Structure and validate recognizer output from stdin
//!
//! Reads one JSON request per line. All lines belong to a single turn and
//! share its record cache. Each request names the flow state and carries
//! the recognizer response:
//!
//! ```json
//! {"flow_state": "ask_size", "payload": {"text": "medium", "entities": []}}
//! ```
//!
//! One JSON result is printed per non-blank line. A line that cannot be
//! decoded yields `{"line": n, "error": "..."}` and reading continues.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use dialog_gate::adapters::{RecognizerPayload, TurnScopedCache, YamlRuleCatalog};
use dialog_gate::application::{
    StructureUtteranceCommand, StructureUtteranceHandler, ValidateInputCommand,
    ValidateInputHandler,
};
use dialog_gate::config::{init_tracing, AppConfig};
use dialog_gate::domain::entities::StructuredRecord;
use dialog_gate::domain::foundation::{ContextSnapshot, TurnId};
use dialog_gate::domain::validation::ValidationVerdict;
use dialog_gate::ports::{RuleCatalog, RuleCatalogError};

#[derive(Debug, Deserialize)]
struct TurnRequest {
    flow_state: String,
    payload: RecognizerPayload,
    /// Replaces the context derived from the payload's intent.
    #[serde(default)]
    context: Option<ContextSnapshot>,
}

#[derive(Debug, Serialize)]
struct TurnResponse {
    turn_id: TurnId,
    flow_state: String,
    record: StructuredRecord,
    cache_hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<&'static str>,
    verdict: ValidationVerdict,
}

#[derive(Debug, Serialize)]
struct RejectedLine {
    line: usize,
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LineOutcome {
    Processed(Box<TurnResponse>),
    Rejected(RejectedLine),
}

/// Handlers and cache for one turn
struct TurnPipeline {
    turn_id: TurnId,
    structure: StructureUtteranceHandler,
    validate: ValidateInputHandler,
    cache: TurnScopedCache,
}

impl TurnPipeline {
    fn from_config(config: &AppConfig) -> Result<Self, RuleCatalogError> {
        let catalog: Arc<dyn RuleCatalog> = match &config.rules.path {
            Some(path) => Arc::new(YamlRuleCatalog::from_path(path)?),
            None => {
                info!("No rule catalog configured; every flow state passes");
                Arc::new(YamlRuleCatalog::default())
            }
        };

        let turn_id = TurnId::new();
        Ok(Self {
            turn_id,
            structure: StructureUtteranceHandler::new(),
            validate: ValidateInputHandler::new(catalog, config.validation.engine()),
            cache: TurnScopedCache::open(turn_id, config.cache.ttl()),
        })
    }

    /// Handles one input line; blank lines produce nothing.
    fn handle_line(&mut self, line_no: usize, line: &str) -> Option<LineOutcome> {
        if line.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<TurnRequest>(line) {
            Ok(request) => Some(LineOutcome::Processed(Box::new(self.process(request)))),
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping undecodable request");
                Some(LineOutcome::Rejected(RejectedLine {
                    line: line_no,
                    error: e.to_string(),
                }))
            }
        }
    }

    fn process(&mut self, request: TurnRequest) -> TurnResponse {
        let TurnRequest {
            flow_state,
            payload,
            context,
        } = request;

        let structured = self.structure.handle(
            StructureUtteranceCommand {
                text: payload.text.clone(),
                spans: payload.spans(),
            },
            &mut self.cache,
        );

        let context = context.unwrap_or_else(|| payload.intent_context());
        let validated = self.validate.handle(ValidateInputCommand {
            flow_state,
            input: payload.text,
            context,
        });

        TurnResponse {
            turn_id: self.turn_id,
            flow_state: validated.flow_state,
            record: structured.record,
            cache_hit: structured.cache_hit,
            strategy: validated.strategy,
            verdict: validated.verdict,
        }
    }
}

fn main() {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dialog-gate: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.logging);

    if let Err(e) = run(&config) {
        error!(error = %e, "dialog-gate failed");
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let mut pipeline = TurnPipeline::from_config(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if let Some(outcome) = pipeline.handle_line(index + 1, &line) {
            serde_json::to_writer(&mut out, &outcome)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
