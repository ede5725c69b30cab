//! The stdin session protocol: disruptions first, then queries until `!`.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use spoorplan_core::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] spoorplan_core::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed session input: {0}")]
    Protocol(String),
}

#[derive(Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Station names one per line, then the total minutes, or `UNREACHABLE`
    Text,
    /// One JSON object per query
    Json,
}

/// Whitespace token scanner over a buffered reader.
///
/// Station names are single tokens, except that a `Den` token is joined
/// with the one that follows it (`Den Haag`, `Den Helder`).
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    pub fn next_station_name(&mut self) -> Result<Option<String>, SessionError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        if token == "Den" {
            let rest = self.next_token()?.ok_or_else(|| {
                SessionError::Protocol("station name ends after 'Den'".to_string())
            })?;
            Ok(Some(format!("{token} {rest}")))
        } else {
            Ok(Some(token))
        }
    }
}

#[derive(Serialize)]
struct QueryRecord<'a> {
    source: &'a str,
    target: &'a str,
    reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stations: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_minutes: Option<Time>,
}

/// Drives a full session: applies the disruptions, then answers queries
/// until the `!` sentinel or end of input.
pub fn run<R: BufRead, W: Write>(
    mut planner: RoutePlanner,
    algorithm: Algorithm,
    format: OutputFormat,
    mut input: TokenReader<R>,
    output: &mut W,
) -> Result<(), SessionError> {
    let count_token = input
        .next_token()?
        .ok_or_else(|| SessionError::Protocol("expected a disruption count".to_string()))?;
    let disruptions: usize = count_token
        .parse()
        .map_err(|_| SessionError::Protocol(format!("invalid disruption count: {count_token}")))?;

    for _ in 0..disruptions {
        let a = expect_station(&mut input)?;
        let b = expect_station(&mut input)?;
        let a = planner.stations().resolve(&a)?;
        let b = planner.stations().resolve(&b)?;
        planner.apply_disruption(a, b)?;
    }

    let mut answered = 0usize;
    while let Some(first) = input.next_station_name()? {
        if first == "!" {
            break;
        }
        let second = expect_station(&mut input)?;
        let source = planner.stations().resolve(&first)?;
        let target = planner.stations().resolve(&second)?;
        let outcome = planner.plan(source, target, algorithm)?;
        report(planner.stations(), source, target, &outcome, format, output)?;
        answered += 1;
    }

    info!("answered {answered} queries after {disruptions} disruptions");
    Ok(())
}

fn expect_station<R: BufRead>(input: &mut TokenReader<R>) -> Result<String, SessionError> {
    input
        .next_station_name()?
        .ok_or_else(|| SessionError::Protocol("expected a station name".to_string()))
}

fn report<W: Write>(
    stations: &StationRegistry,
    source: StationId,
    target: StationId,
    outcome: &SearchOutcome,
    format: OutputFormat,
    output: &mut W,
) -> Result<(), SessionError> {
    let name = |id: StationId| stations.name(id).unwrap_or("?");
    match format {
        OutputFormat::Text => match outcome {
            SearchOutcome::Reached(journey) => {
                for &station in &journey.stations {
                    writeln!(output, "{}", name(station))?;
                }
                writeln!(output, "{}", journey.total_time)?;
            }
            SearchOutcome::Unreachable => writeln!(output, "UNREACHABLE")?,
        },
        OutputFormat::Json => {
            let record = match outcome {
                SearchOutcome::Reached(journey) => QueryRecord {
                    source: name(source),
                    target: name(target),
                    reachable: true,
                    stations: Some(journey.stations.iter().map(|&id| name(id)).collect()),
                    total_minutes: Some(journey.total_time),
                },
                SearchOutcome::Unreachable => QueryRecord {
                    source: name(source),
                    target: name(target),
                    reachable: false,
                    stations: None,
                    total_minutes: None,
                },
            };
            writeln!(output, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn planner() -> RoutePlanner {
        let stations = netherlands();
        // Leeuwarden <-> Groningen <-> Meppel, and an isolated pair
        let network = RailNetwork::from_edges(
            stations.len(),
            [
                (0, 1, 90),
                (1, 0, 90),
                (1, 2, 74),
                (2, 1, 74),
                (7, 8, 91),
                (8, 7, 91),
            ],
        )
        .unwrap();
        RoutePlanner::new(stations, network).unwrap()
    }

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run(
            planner(),
            Algorithm::AStar,
            OutputFormat::Text,
            TokenReader::new(Cursor::new(input)),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn answers_a_simple_query() {
        let output = session("0\nLeeuwarden Meppel\n!\n");
        assert_eq!(output, "Leeuwarden\nGroningen\nMeppel\n164\n");
    }

    #[test]
    fn disruption_makes_the_route_unreachable() {
        let output = session("1\nGroningen Meppel\nLeeuwarden Meppel\n!\n");
        assert_eq!(output, "UNREACHABLE\n");
    }

    #[test]
    fn two_word_station_names_are_joined() {
        let output = session("0\nDen Haag Utrecht\n!\n");
        assert_eq!(output, "Den Haag\nUtrecht\n91\n");
    }

    #[test]
    fn end_of_input_terminates_the_query_loop() {
        let output = session("0\nLeeuwarden Groningen\n");
        assert_eq!(output, "Leeuwarden\nGroningen\n90\n");
    }

    #[test]
    fn unknown_station_fails_fast() {
        let result = run(
            planner(),
            Algorithm::AStar,
            OutputFormat::Text,
            TokenReader::new(Cursor::new("0\nLeeuwarden Atlantis\n!\n")),
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(SessionError::Core(spoorplan_core::Error::UnknownStation(_)))
        ));
    }

    #[test]
    fn json_format_emits_one_object_per_query() {
        let mut output = Vec::new();
        run(
            planner(),
            Algorithm::Dijkstra,
            OutputFormat::Json,
            TokenReader::new(Cursor::new("0\nLeeuwarden Groningen\n!\n")),
            &mut output,
        )
        .unwrap();
        let record: serde_json::Value =
            serde_json::from_str(String::from_utf8(output).unwrap().trim()).unwrap();
        assert_eq!(record["reachable"], true);
        assert_eq!(record["total_minutes"], 90);
        assert_eq!(record["stations"][0], "Leeuwarden");
    }
}
