// Block boundary matcher tests
use super::{cursor_for, raw_index_of_last, seek, seek_past};
use crate::*;
use LuaTokenKind::{
    TkDo,
    TkElse,
    TkElseIf,
    TkEnd,
    TkFor,
    TkFunction,
    TkIf,
    TkLocal,
    TkName,
    TkRepeat,
    TkThen,
    TkUntil,
    TkWhile,
};

#[test]
fn test_nested_do_matches_innermost_first() {
    let text = "do a do b end end";
    let mut cursor = cursor_for(text);
    assert_eq!(match_start(&mut cursor, 0, TkDo, false), Ok(()));
    // level 0 leaves its own terminator in place
    assert_eq!(cursor.current_token(), TkEnd);
    assert_eq!(cursor.current_token_index(), raw_index_of_last(&cursor, TkEnd));

    let mut cursor = cursor_for(text);
    seek(&mut cursor, TkDo, 1);
    assert_eq!(match_start(&mut cursor, 0, TkDo, false), Ok(()));
    assert_eq!(cursor.current_token_range().start_offset, 10);
}

#[test]
fn test_if_chain_is_one_block() {
    let text = "if x then y elseif z then w else v end";
    let mut cursor = cursor_for(text);
    assert_eq!(match_start(&mut cursor, 0, TkIf, false), Ok(()));
    assert_eq!(cursor.current_token(), TkEnd);
    assert_eq!(cursor.current_token_range().end_offset(), text.len());
}

#[test]
fn test_then_at_level_zero_stops_at_next_branch() {
    let mut cursor = cursor_for("if x then y elseif z then w else v end");
    seek_past(&mut cursor, TkThen, 0);
    assert_eq!(match_start(&mut cursor, 0, TkThen, true), Ok(()));
    assert_eq!(cursor.current_token(), TkElseIf);

    seek_past(&mut cursor, TkThen, 0);
    assert_eq!(match_start(&mut cursor, 0, TkThen, true), Ok(()));
    assert_eq!(cursor.current_token(), TkElse);

    cursor.bump();
    assert_eq!(match_start(&mut cursor, 0, TkElse, true), Ok(()));
    assert_eq!(cursor.current_token(), TkEnd);
}

#[test]
fn test_nested_then_runs_to_its_end() {
    let mut cursor = cursor_for("then c else d end e end");
    assert_eq!(match_start(&mut cursor, 1, TkThen, false), Ok(()));
    assert_eq!(cursor.current_token_text(), "e");
}

#[test]
fn test_do_resumes_after_nested_then_block() {
    let text = "do then c else d end e end tail";
    let mut cursor = cursor_for(text);
    assert_eq!(match_start(&mut cursor, 0, TkDo, false), Ok(()));
    assert_eq!(cursor.current_token(), TkEnd);
    assert_eq!(cursor.current_token_range().start_offset, 23);
    assert_eq!(cursor.current_token_index(), raw_index_of_last(&cursor, TkEnd));
}

#[test]
fn test_failed_match_at_level_zero_is_not_rewound() {
    let mut cursor = cursor_for("if X then Y");
    let start = cursor.position();
    assert_eq!(
        match_start(&mut cursor, 0, TkIf, false),
        Err(BlockMatchError::UnterminatedBlock { opener: TkIf })
    );
    assert_ne!(cursor.position(), start);
    assert!(cursor.is_eof());
}

#[test]
fn test_nested_if_inside_then_branch() {
    let mut cursor = cursor_for("if a then if b then c else d end e end");
    seek_past(&mut cursor, TkThen, 0);
    assert_eq!(match_start(&mut cursor, 0, TkThen, true), Ok(()));
    assert_eq!(cursor.current_token(), TkEnd);
    assert_eq!(cursor.current_token_index(), raw_index_of_last(&cursor, TkEnd));
}

#[test]
fn test_unterminated_if() {
    let mut cursor = cursor_for("if X then Y");
    assert_eq!(
        match_start(&mut cursor, 0, TkIf, false),
        Err(BlockMatchError::UnterminatedBlock { opener: TkIf })
    );
    assert!(cursor.is_eof());
}

#[test]
fn test_unterminated_nested_block() {
    let mut cursor = cursor_for("do x do y end");
    assert_eq!(
        match_start(&mut cursor, 0, TkDo, false),
        Err(BlockMatchError::UnterminatedBlock { opener: TkDo })
    );
}

#[test]
fn test_unknown_opener_consumes_nothing() {
    let mut cursor = cursor_for("local x = 1 end");
    for opener in [TkLocal, TkFor, TkWhile, TkEnd, TkElseIf, TkUntil, TkName] {
        assert_eq!(
            match_start(&mut cursor, 0, opener, false),
            Err(BlockMatchError::UnknownOpener(opener))
        );
        assert_eq!(cursor.position(), 0);
    }
}

#[test]
fn test_repeat_until() {
    let mut cursor = cursor_for("repeat a = a + 1 until a > 3");
    assert_eq!(match_start(&mut cursor, 0, TkRepeat, false), Ok(()));
    assert_eq!(cursor.current_token(), TkUntil);
}

#[test]
fn test_repeat_nested_in_do() {
    let mut cursor = cursor_for("do repeat x until y end z");
    assert_eq!(match_start(&mut cursor, 0, TkDo, false), Ok(()));
    assert_eq!(cursor.current_token(), TkEnd);
    cursor.bump();
    assert_eq!(cursor.current_token_text(), "z");
}

#[test]
fn test_function_with_nested_blocks() {
    let text = r#"
        function f(a)
            if a then
                for i = 1, 10 do
                    print(i)
                end
                return function() return a end
            end
            while true do break end
            return 2
        end
        print(f)
    "#;
    let mut cursor = cursor_for(text);
    seek(&mut cursor, TkFunction, 0);
    assert_eq!(match_start(&mut cursor, 0, TkFunction, false), Ok(()));
    assert_eq!(cursor.current_token(), TkEnd);
    cursor.bump();
    assert_eq!(cursor.current_token_text(), "print");
}

#[test]
fn test_nested_level_consumes_terminator() {
    let mut cursor = cursor_for("do x end y");
    assert_eq!(match_start(&mut cursor, 1, TkDo, false), Ok(()));
    assert_eq!(cursor.current_token_text(), "y");
}

#[test]
fn test_failed_nested_level_runs_to_eof() {
    let mut cursor = cursor_for("do x");
    assert!(match_start(&mut cursor, 1, TkDo, false).is_err());
    assert!(cursor.is_eof());
}

#[test]
fn test_block_keywords_in_strings_and_comments() {
    let mut cursor = cursor_for("do s = 'end' -- end\n --[[ do ]] end tail");
    assert_eq!(match_start(&mut cursor, 0, TkDo, false), Ok(()));
    cursor.bump();
    assert_eq!(cursor.current_token_text(), "tail");
}

#[test]
fn test_match_end_with_explicit_construct() {
    let mut cursor = cursor_for("then a elseif b then c end");
    assert_eq!(
        match_end(&mut cursor, BlockConstruct::Then, false, 0),
        Ok(())
    );
    assert_eq!(cursor.current_token(), TkElseIf);
}
