use std::str::FromStr;

use color_eyre::{
    eyre::{bail, eyre},
    Report,
};
use convert_case::{Case, Converter};
use runo::card::CardColor;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    Play,
    Draw,
    Uno,
    Color,
    Next,
    Reset,
    Hand,
    Help,
    Quit,
}

impl Keyword {
    fn name(&self) -> String {
        let converter = Converter::new()
            .from_case(Case::Pascal)
            .to_case(Case::Lower);
        converter.convert(format!("{self}"))
    }

    fn usage(&self) -> &'static str {
        match self {
            Keyword::Play => "<n>    play the n-th card of your hand",
            Keyword::Draw => "       draw a card and end your turn",
            Keyword::Uno => "        call UNO before playing your second to last card",
            Keyword::Color => "<name> pick the color after a wild",
            Keyword::Next => "       deal the next round",
            Keyword::Reset => "      start a new match from zero",
            Keyword::Hand => "       show the table again",
            Keyword::Help => "       show this list",
            Keyword::Quit => "       leave (progress is kept after each round)",
        }
    }
}

/// A line typed by the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based position in the displayed hand.
    Play(usize),
    Draw,
    Uno,
    Color(CardColor),
    Next,
    Reset,
    Hand,
    Help,
    Quit,
}

impl Command {
    pub fn help() -> String {
        Keyword::iter()
            .map(|keyword| format!("  {} {}", keyword.name(), keyword.usage()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Command {
    type Err = Report;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            bail!("Type `help` to see what you can do.");
        };
        let keyword = Keyword::from_str(first)
            .map_err(|_| eyre!("Unknown command `{first}`, type `help` for the list."))?;
        let argument = words.next();

        let command = match (keyword, argument) {
            (Keyword::Play, Some(position)) => {
                let position: usize = position
                    .parse()
                    .map_err(|_| eyre!("`{position}` is not a card number."))?;
                if position == 0 {
                    bail!("Cards are numbered from 1.");
                }
                Command::Play(position - 1)
            }
            (Keyword::Play, None) => bail!("Which card? Try `play 1`."),
            (Keyword::Color, Some(name)) => {
                let color = CardColor::from_str(name).map_err(|_| {
                    let colors = CardColor::iter()
                        .map(|color| color.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    eyre!("`{name}` is not a color, pick one of {colors}.")
                })?;
                Command::Color(color)
            }
            (Keyword::Color, None) => bail!("Which color? Try `color red`."),
            (Keyword::Draw, _) => Command::Draw,
            (Keyword::Uno, _) => Command::Uno,
            (Keyword::Next, _) => Command::Next,
            (Keyword::Reset, _) => Command::Reset,
            (Keyword::Hand, _) => Command::Hand,
            (Keyword::Help, _) => Command::Help,
            (Keyword::Quit, _) => Command::Quit,
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("play 3".parse::<Command>().unwrap(), Command::Play(2));
        assert_eq!("  DRAW ".parse::<Command>().unwrap(), Command::Draw);
        assert_eq!(
            "color Blue".parse::<Command>().unwrap(),
            Command::Color(CardColor::Blue)
        );
        assert_eq!("uno".parse::<Command>().unwrap(), Command::Uno);
        assert_eq!("next".parse::<Command>().unwrap(), Command::Next);
    }

    #[test]
    fn rejects_bad_input() {
        assert!("".parse::<Command>().is_err());
        assert!("play".parse::<Command>().is_err());
        assert!("play 0".parse::<Command>().is_err());
        assert!("play two".parse::<Command>().is_err());
        assert!("color purple".parse::<Command>().is_err());
        assert!("shuffle".parse::<Command>().is_err());
    }

    #[test]
    fn help_lists_every_keyword() {
        let help = Command::help();
        for keyword in Keyword::iter() {
            assert!(help.contains(&format!("  {} ", keyword.name())));
        }
    }
}
