//! Command parsing for the interactive browser

use std::fmt;
use std::str::FromStr;

use methodbox::{FilterCriteria, Phase, SizeGroup, TimeBudget, UnknownKeyword};

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every method, grouped by zone and phase
    List,

    /// Select an entry and show its detail view
    Select(String),

    /// Show the detail view of the current selection
    Current,

    /// Clear the selection
    Clear,

    /// Run a recommendation query
    Recommend(FilterCriteria),

    /// Show command help
    Help,

    /// Leave the browser
    Quit,
}

/// Command summary shown by `help` and at startup.
pub const COMMANDS: &[(&str, &str)] = &[
    ("list", "show every method, grouped by zone and phase"),
    ("select <id>", "open a method's detail view"),
    ("current", "show the currently selected method"),
    ("clear", "return to the no-selection placeholder"),
    (
        "recommend <phase> <time> <size>",
        "list methods matching all three criteria",
    ),
    ("help", "show this summary"),
    ("quit", "leave the browser"),
];

/// Print the command summary.
pub fn print_help() {
    println!("Commands:");
    for (usage, blurb) in COMMANDS {
        println!("  {usage:<33} {blurb}");
    }
}

/// Parse one input line into a command.
///
/// The `Err` variant carries a message ready to show the user.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    match head {
        "list" | "browse" => Ok(Command::List),
        "select" | "show" => match rest.as_slice() {
            [id] => Ok(Command::Select((*id).to_string())),
            _ => Err("usage: select <id>".to_string()),
        },
        "current" => Ok(Command::Current),
        "clear" => Ok(Command::Clear),
        "recommend" | "filter" => parse_recommend(&rest),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help` for the list")),
    }
}

const RECOMMEND_USAGE: &str = "usage: recommend <phase> <time> <size>";

fn parse_recommend(args: &[&str]) -> Result<Command, String> {
    // Phase names may contain spaces ("point of view"), so the time and
    // size keywords come off the end and everything before them is the
    // phase.
    let [phase_words @ .., time, size] = args else {
        return Err(RECOMMEND_USAGE.to_string());
    };
    if phase_words.is_empty() {
        return Err(RECOMMEND_USAGE.to_string());
    }

    let phase = parse_keyword(&phase_words.join(" "), &Phase::ALL)?;
    let time = parse_keyword(time, &TimeBudget::ALL)?;
    let size_group = parse_keyword(size, &SizeGroup::ALL)?;

    Ok(Command::Recommend(FilterCriteria::new(phase, time, size_group)))
}

fn parse_keyword<T>(input: &str, accepted: &[T]) -> Result<T, String>
where
    T: FromStr<Err = UnknownKeyword> + fmt::Display,
{
    input.parse().map_err(|err: UnknownKeyword| {
        let accepted = accepted
            .iter()
            .map(|value| format!("`{value}`"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{err}; accepted values: {accepted}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodbox::{Phase, SizeGroup, TimeBudget};

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse("list"), Ok(Command::List));
        assert_eq!(parse("browse"), Ok(Command::List));
        assert_eq!(parse("current"), Ok(Command::Current));
        assert_eq!(parse("clear"), Ok(Command::Clear));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse("select empathy_map"),
            Ok(Command::Select("empathy_map".to_string()))
        );
        assert_eq!(
            parse("show persona"),
            Ok(Command::Select("persona".to_string()))
        );
        assert!(parse("select").is_err());
        assert!(parse("select one two").is_err());
    }

    #[test]
    fn test_parse_recommend() {
        let expected = Command::Recommend(FilterCriteria::new(
            Phase::Ideate,
            TimeBudget::Short,
            SizeGroup::Small,
        ));
        assert_eq!(parse("recommend ideate short small"), Ok(expected.clone()));
        assert_eq!(parse("filter Ideate short small"), Ok(expected));
    }

    #[test]
    fn test_parse_recommend_with_multi_word_phase() {
        let expected = Command::Recommend(FilterCriteria::new(
            Phase::PointOfView,
            TimeBudget::Medium,
            SizeGroup::Large,
        ));
        assert_eq!(parse("recommend point of view medium large"), Ok(expected));
    }

    #[test]
    fn test_parse_recommend_reports_accepted_values() {
        let err = parse("recommend ideate whenever small").unwrap_err();
        assert!(err.contains("whenever"));
        assert!(err.contains("`short`"));

        let err = parse("recommend someday short small").unwrap_err();
        assert!(err.contains("`Point of view`"));
    }

    #[test]
    fn test_parse_recommend_usage_errors() {
        assert_eq!(parse("recommend"), Err(RECOMMEND_USAGE.to_string()));
        assert_eq!(parse("recommend ideate"), Err(RECOMMEND_USAGE.to_string()));
        assert_eq!(
            parse("recommend short small"),
            Err(RECOMMEND_USAGE.to_string())
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
