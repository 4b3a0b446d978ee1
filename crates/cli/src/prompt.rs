use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use vigor_domain::{Equipment, EquipmentError, Level, Rating, SessionDuration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Plan,
    ExerciseAdvice,
    Progress,
    GeneralAdvice,
}

impl MenuChoice {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(MenuChoice::Plan),
            "2" => Some(MenuChoice::ExerciseAdvice),
            "3" => Some(MenuChoice::Progress),
            "4" => Some(MenuChoice::GeneralAdvice),
            _ => None,
        }
    }
}

pub fn read_line(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn menu_choice(text: &str) -> io::Result<MenuChoice> {
    loop {
        if let Some(choice) = MenuChoice::parse(&read_line(text)?) {
            return Ok(choice);
        }
        println!("Invalid input, try again.");
    }
}

pub fn level() -> io::Result<Level> {
    loop {
        match Level::try_from(
            read_line("Enter your fitness level (beginner, intermediate, advanced): ")?.as_str(),
        ) {
            Ok(level) => return Ok(level),
            Err(err) => println!("{err}"),
        }
    }
}

pub fn equipment() -> io::Result<BTreeSet<Equipment>> {
    loop {
        match parse_equipment(&read_line(
            "Enter your available equipment (comma-separated): ",
        )?) {
            Ok(equipment) => return Ok(equipment),
            Err(err) => println!("{err}"),
        }
    }
}

pub fn duration() -> io::Result<SessionDuration> {
    loop {
        match SessionDuration::try_from(
            read_line("Enter your desired workout duration in minutes (30, 45, 60): ")?.as_str(),
        ) {
            Ok(duration) => return Ok(duration),
            Err(err) => println!("{err}"),
        }
    }
}

pub fn rating(exercise: &str) -> io::Result<Rating> {
    loop {
        match Rating::try_from(
            read_line(&format!("Rate your experience with {exercise} (1-10): "))?.as_str(),
        ) {
            Ok(rating) => return Ok(rating),
            Err(err) => println!("{err}"),
        }
    }
}

pub fn parse_equipment(value: &str) -> Result<BTreeSet<Equipment>, EquipmentError> {
    value.split(',').map(Equipment::try_from).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", Some(MenuChoice::Plan))]
    #[case(" 2 ", Some(MenuChoice::ExerciseAdvice))]
    #[case("3", Some(MenuChoice::Progress))]
    #[case("4", Some(MenuChoice::GeneralAdvice))]
    #[case("5", None)]
    #[case("one", None)]
    #[case("", None)]
    fn test_menu_choice_parse(#[case] input: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::parse(input), expected);
    }

    #[rstest]
    #[case("bodyweight", Ok(BTreeSet::from([Equipment::Bodyweight])))]
    #[case(
        "barbell, dumbbell",
        Ok(BTreeSet::from([Equipment::Barbell, Equipment::Dumbbell]))
    )]
    #[case(
        "Barbell,CABLE , bodyweight",
        Ok(BTreeSet::from([
            Equipment::Barbell,
            Equipment::Bodyweight,
            Equipment::Cable
        ]))
    )]
    #[case("", Err(EquipmentError::Unknown(String::new())))]
    #[case(
        "barbell, kettlebell",
        Err(EquipmentError::Unknown("kettlebell".to_string()))
    )]
    fn test_parse_equipment(
        #[case] input: &str,
        #[case] expected: Result<BTreeSet<Equipment>, EquipmentError>,
    ) {
        assert_eq!(parse_equipment(input), expected);
    }
}
