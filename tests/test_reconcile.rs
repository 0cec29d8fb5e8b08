use rat_reformat::emulator::InputEmulator;
use rat_reformat::formats::{Grouping, Template};
use rat_reformat::{
    CharRule, Condition, DeleteMode, EditOutcome, Reformat, ReformatError, TextState, format_fn,
};

fn phone() -> Reformat {
    Reformat::new(Template::new("(###) ###-####"))
}

#[test]
fn test_mask_trims_template() {
    let mut input = InputEmulator::new(phone().mask(Condition::when(|s| s.len() < 14)));

    input.put("1").unwrap();
    assert_eq!(input.render(), "(1|");
    input.put("2").unwrap();
    input.put("3").unwrap();
    assert_eq!(input.render(), "(123|");
    input.put("4").unwrap();
    assert_eq!(input.render(), "(123) 4|");
    input.put("56").unwrap();
    assert_eq!(input.render(), "(123) 456|");
    input.put("7890").unwrap();
    assert_eq!(input.render(), "(123) 456-7890|");

    // full, the formatter drops the excess
    assert_eq!(input.put("1").unwrap(), EditOutcome::Unchanged);
    assert_eq!(input.render(), "(123) 456-7890|");
}

#[test]
fn test_mask_on_backspace() {
    let mut input = InputEmulator::new(phone().mask(true));

    input.put("1234").unwrap();
    assert_eq!(input.render(), "(123) 4|");
    input.backspace().unwrap();
    assert_eq!(input.render(), "(123|");
    input.backspace().unwrap();
    assert_eq!(input.render(), "(12|");
    input.backspace().unwrap();
    input.backspace().unwrap();
    assert_eq!(input.render(), "|");
    assert!(input.state.is_empty());
}

#[test]
fn test_unmasked_template() {
    let mut input = InputEmulator::new(phone());
    input.put("123").unwrap();
    assert_eq!(input.render(), "(123|) ");

    let mut input = InputEmulator::new(phone().jump_template(true));
    input.put("123").unwrap();
    assert_eq!(input.render(), "(123) |");
    // only the template before the caret, remove the 3 instead
    input.backspace().unwrap();
    assert_eq!(input.render(), "(12|");
}

#[test]
fn test_jump_on_leading_template() {
    let mut input = InputEmulator::new(phone().jump_template(true));
    input.put("1").unwrap();
    input.move_caret(-100).unwrap();
    assert_eq!(input.render(), "|(1");
    input.put("9").unwrap();
    assert_eq!(input.render(), "(9|1");
}

#[test]
fn test_truncation_clamps() {
    let mut input = InputEmulator::new(Reformat::new(Template::new("##-##")));
    input.put("123456").unwrap();
    assert_eq!(input.render(), "12-34|");

    input.move_caret(-4).unwrap();
    assert_eq!(input.render(), "1|2-34");
    input.put("9").unwrap();
    assert_eq!(input.render(), "19|-23");
}

#[test]
fn test_overwrite_when_full() {
    let date = Reformat::new(Template::new("##/##/####"))
        .overwrite(Condition::when(|s| s.len() >= 10))
        .jump_template(true);
    let mut input = InputEmulator::new(date);

    input.put("01022024").unwrap();
    assert_eq!(input.render(), "01/02/2024|");
    input.move_caret(-100).unwrap();
    input.put("1").unwrap();
    assert_eq!(input.render(), "1|1/02/2024");
    input.put("2").unwrap();
    assert_eq!(input.render(), "12/|02/2024");
    input.put("3").unwrap();
    assert_eq!(input.render(), "12/3|2/2024");
}

#[test]
fn test_overwrite_not_full_inserts() {
    let date = Reformat::new(Template::new("##/##/####"))
        .overwrite(Condition::when(|s| s.len() >= 10));
    let mut input = InputEmulator::new(date);
    input.put("0102").unwrap();
    assert_eq!(input.render(), "01/02|/");
    input.move_caret(-100).unwrap();
    input.put("9").unwrap();
    assert_eq!(input.render(), "9|0/10/2");
}

#[test]
fn test_replace_unchanged() {
    let fmt = Reformat::new(Grouping::default());
    let prev = TextState::with_caret("1,234", 2).unwrap();
    // separator swapped, same digits
    let next = fmt.reformat(&prev, "1.234", 2).unwrap();
    assert_eq!(next, prev);
}

#[test]
fn test_replace_selection() {
    let fmt = Reformat::new(Grouping::default());
    let prev = TextState::with_caret("1,234", 5).unwrap();
    // host replaced "23" with "9"
    let next = fmt.reformat(&prev, "1,94", 3).unwrap();
    assert_eq!(next.render(), "19|4");
    // and "1,2" with "55"
    let next = fmt.reformat(&prev, "5534", 2).unwrap();
    assert_eq!(next.render(), "5,5|34");
}

#[test]
fn test_backspace_at_start() {
    let fmt = phone();
    let prev = TextState::with_caret("(1", 1).unwrap();
    // host removed the paren, nothing significant before
    let next = fmt.reformat(&prev, "1", 0).unwrap();
    assert_eq!(next, prev);
}

#[test]
fn test_step_over_backspace_template() {
    let fmt = phone().delete_mode(DeleteMode::StepOver);
    let prev = TextState::with_caret("(123) 4", 6).unwrap();
    let next = fmt.reformat(&prev, "(123)4", 5).unwrap();
    assert_eq!(next.render(), "(123|) 4");
}

#[test]
fn test_refuse_rule() {
    let fmt = Reformat::new(format_fn(|s: &str| s.to_uppercase())).refuse(CharRule::one_of(" -"));
    let mut input = InputEmulator::new(fmt);
    input.put("ab-c d").unwrap();
    assert_eq!(input.render(), "ABCD|");
    assert_eq!(input.state.value(), "ABCD");
}

#[test]
fn test_host_contract() {
    let mut input = InputEmulator::new(Reformat::new(Grouping::default()));
    input.put("12").unwrap();
    assert_eq!(
        input.state.handle_edit("123", 4),
        Err(ReformatError::CaretOutOfBounds(4, 3))
    );
    assert_eq!(input.render(), "12|");
}

#[test]
fn test_initial_value() {
    let input = InputEmulator::with_value(phone().mask(true), "555 123 4");
    assert_eq!(input.render(), "(555) 123-4|");
}
