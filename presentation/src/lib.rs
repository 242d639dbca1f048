//! Small crate to be a central point for presentation requisites.
//!
//! Simply shows the finalized matches & the global death-cause tally as a Json

use model::report::{GameSnapshot, MatchSequence, ReasonTally};
use std::fmt::Display;
use std::io::Write;

/// IMPLEMENTATION NOTE: here we use our hand-crafted json instead of the one provided by the serde-json crate so we can better control the formatting of the output
///                      to match the exact specification + gain a bit of performance.
///                      Player & reason tokens are restricted to word characters and angle brackets by the parser, so no escaping is ever required.
pub fn to_json(match_sequence: &MatchSequence, reason_tally: &ReasonTally, mut writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {

    let mut write = |text: &str|
        writer.write_all(text.as_bytes())
            .map_err(|err| format!("presentation: to_json(): Error writing the report to the given `writer`: {err}"));

    write("{\n")?;
    write("  \"games\": [")?;
    for (element, snapshot) in match_sequence.iter().enumerate() {
        if element > 0 {
            write(",")?;
        }
        write("\n    {\n")?;
        write(&format!("      \"id\": \"{}\",\n", snapshot.id))?;
        write(&format!("      \"totalKills\": {},\n", snapshot.total_kills))?;
        write(&format!("      \"players\": {},\n", serialize_players(snapshot)))?;
        write(&format!("      \"kills\": {}\n", serialize_kills("      ", snapshot)))?;
        write("    }")?;
    }
    if match_sequence.is_empty() {
        write("],\n")?;
    } else {
        write("\n  ],\n")?;
    }
    write(&format!("  \"killsByReason\": {}\n", serialize_map("  ", reason_tally.iter())))?;
    write("}\n")?;
    Ok(())
}

fn serialize_players(snapshot: &GameSnapshot) -> String {
    let mut string = snapshot.players.iter()
        .fold(String::from("["), |mut acc, player| {
            if acc.len() != 1 {
                acc.push_str(", ");
            }
            acc.push('"');
            acc.push_str(player);
            acc.push('"');
            acc
        });
    string.push(']');
    string
}

/// Scores are reported in the players' first-seen order -- the `players` roster and the
/// `kills` key set are guaranteed to coincide by the match accumulator
fn serialize_kills(pre_ident: &str, snapshot: &GameSnapshot) -> String {
    serialize_map(pre_ident, snapshot.players.iter().map(|player| (player, &snapshot.kills[player])))
}

fn serialize_map<'a, T: Display + 'a>(pre_ident: &str, entries: impl Iterator<Item=(&'a String, &'a T)>) -> String {
    let mut string = entries
        .fold(String::from("{\n  "), |mut acc, (key, value)| {
            if acc.len() != 4 {
                acc.push_str(",\n  ");
            }
            acc.push_str(pre_ident);
            acc.push_str(&format!("\"{key}\": {value}"));
            acc
        });
    if string.len() == 4 {
        return String::from("{}");
    }
    string.push('\n');
    string.push_str(pre_ident);
    string.push('}');
    string
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::io::Cursor;

    #[test]
    fn single_match_report() {
        let match_sequence = vec![
            GameSnapshot {
                id: "game_1".to_owned(),
                total_kills: 45,
                players: vec!["Zeh".to_owned(), "Dono".to_owned(), "Isgalamido".to_owned()],
                kills: BTreeMap::from([
                    ("Dono".to_owned(), 5),
                    ("Isgalamido".to_owned(), 18),
                    ("Zeh".to_owned(), 20),
                ]),
            }
        ];
        let reason_tally = ReasonTally::from([
            ("MOD_RAILGUN".to_owned(), 38),
            ("MOD_TRIGGER_HURT".to_owned(), 7),
        ]);
        let json = assert_json(&match_sequence, &reason_tally);
        assert_eq!(json["games"][0]["id"], "game_1", "Unexpected match id");
        assert_eq!(json["games"][0]["totalKills"], 45, "Unexpected total kills");
        assert_eq!(json["games"][0]["players"][0], "Zeh", "`players` must be reported in first-seen order");
        assert_eq!(json["games"][0]["kills"]["Isgalamido"], 18, "Unexpected player score");
        assert_eq!(json["killsByReason"]["MOD_RAILGUN"], 38, "Unexpected death-cause count");
    }

    /// Negative scores (world kills) must be emitted as valid json integers
    #[test]
    fn negative_scores() {
        let match_sequence = vec![
            GameSnapshot {
                id: "game_1".to_owned(),
                total_kills: 1,
                players: vec!["Isgalamido".to_owned()],
                kills: BTreeMap::from([("Isgalamido".to_owned(), -1)]),
            }
        ];
        let json = assert_json(&match_sequence, &ReasonTally::from([("MOD_TRIGGER_HURT".to_owned(), 1)]));
        assert_eq!(json["games"][0]["kills"]["Isgalamido"], -1, "Unexpected player score");
    }

    #[test]
    fn double_match_report() {
        let snapshot = || GameSnapshot {
            id: "game_1".to_owned(),
            total_kills: 2,
            players: vec!["A".to_owned(), "B".to_owned()],
            kills: BTreeMap::from([("A".to_owned(), 2), ("B".to_owned(), 0)]),
        };
        let match_sequence = vec![snapshot(), GameSnapshot { id: "game_2".to_owned(), ..snapshot() }];
        let json = assert_json(&match_sequence, &ReasonTally::new());
        assert_eq!(json["games"].as_array().map(Vec::len), Some(2), "Unexpected number of reported matches");
        assert_eq!(json["games"][1]["id"], "game_2", "Unexpected id for the second match");
    }

    /// The document must come out complete even through writers that accept
    /// fewer bytes than offered on each `write()` call
    #[test]
    fn partial_writes_dont_truncate_the_report() {
        /// [Write] implementation taking a single byte per call
        struct TricklingWriter(Vec<u8>);
        impl Write for TricklingWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.extend_from_slice(&buf[..1.min(buf.len())]);
                Ok(1.min(buf.len()))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let match_sequence = vec![
            GameSnapshot {
                id: "game_1".to_owned(),
                total_kills: 1,
                players: vec!["Isgalamido".to_owned()],
                kills: BTreeMap::from([("Isgalamido".to_owned(), 1)]),
            }
        ];
        let reason_tally = ReasonTally::from([("MOD_RAILGUN".to_owned(), 1)]);
        let mut trickling_writer = TricklingWriter(Vec::new());
        to_json(&match_sequence, &reason_tally, &mut trickling_writer).expect("Failure in generating the json");
        let json_string = String::from_utf8(trickling_writer.0).unwrap();
        let json = serde_json::from_str::<Value>(&json_string)
            .unwrap_or_else(|err| panic!("The produced JSON is not valid: {err:?}"));
        assert_eq!(json["games"][0]["kills"]["Isgalamido"], 1, "Unexpected player score");
        assert_eq!(json["killsByReason"]["MOD_RAILGUN"], 1, "Unexpected death-cause count");
    }

    /// An input with no finalized matches still yields a well-formed document
    #[test]
    fn empty_report() {
        let json = assert_json(&MatchSequence::new(), &ReasonTally::new());
        assert_eq!(json["games"].as_array().map(Vec::len), Some(0), "`games` must be an empty array");
        assert!(json["killsByReason"].as_object().map(|tally| tally.is_empty()).unwrap_or(false), "`killsByReason` must be an empty object");
    }

    fn assert_json(match_sequence: &MatchSequence, reason_tally: &ReasonTally) -> Value {
        let mut buffer = Cursor::new(Vec::new());
        to_json(match_sequence, reason_tally, &mut buffer).expect("Failure in generating the json");
        let json_string = String::from_utf8(buffer.into_inner()).unwrap();
        print!("{json_string}");
        serde_json::from_str::<Value>(&json_string)
            .unwrap_or_else(|err| panic!("The produced JSON is not valid: {err:?}"))
    }
}
