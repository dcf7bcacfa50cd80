use tictactoe::ui::{pad_width, parse_index, PromptInput};

#[test]
fn test_parse_index_translates_to_zero_based() {
    assert_eq!(parse_index("1", 3), Some(PromptInput::Index(0)));
    assert_eq!(parse_index("3", 3), Some(PromptInput::Index(2)));
    assert_eq!(parse_index(" 2 \n", 3), Some(PromptInput::Index(1)));
}

#[test]
fn test_parse_index_quit_token() {
    assert_eq!(parse_index("q", 3), Some(PromptInput::Quit));
    assert_eq!(parse_index("q\n", 15), Some(PromptInput::Quit));
}

#[test]
fn test_parse_index_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_index("0", 3), None);
    assert_eq!(parse_index("4", 3), None);
    assert_eq!(parse_index("-1", 3), None);
    assert_eq!(parse_index("abc", 3), None);
    assert_eq!(parse_index("", 3), None);
    assert_eq!(parse_index("Q", 3), None); // quit token is lowercase
}

#[test]
fn test_pad_width_follows_decimal_digits() {
    assert_eq!(pad_width(3), 1);
    assert_eq!(pad_width(9), 1);
    assert_eq!(pad_width(10), 2);
    assert_eq!(pad_width(15), 2);
    assert_eq!(pad_width(100), 3);
}
