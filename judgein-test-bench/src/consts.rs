pub const SUM_INPUT: &str = r#"3
1 2 3
"#;

pub const SUM_SCRIPT: &str = r#"
int 1 100
newline
int -1000 1000
space
int -1000 1000
space
int -1000 1000
newline
eof
"#;

pub const SUM_CRLF_INPUT: &str = "3\r\n1 2 3\r\n";

pub const SUM_MISSING_NEWLINE_INPUT: &str = "3\n1 2 3";

pub const SUM_DOUBLE_SPACE_INPUT: &str = "3\n1  2 3\n";

pub const GRID_INPUT: &str = r#"2 3
#.#
..#
"#;

pub const GRID_SCRIPT: &str = r#"
int 1 50
space
int 1 50
newline
line [#.]{3}
newline
line [#.]{3}
newline
eof
"#;

pub const GRID_BAD_CELL_INPUT: &str = r#"2 3
#x#
..#
"#;

pub const POINTS_INPUT: &str = "0.5 -2.25\n";

pub const POINTS_SCRIPT: &str = r#"
float -10 10
space
float -10 10
newline
eof
"#;

pub const POINTS_OUT_OF_RANGE_INPUT: &str = "0.5 -20.25\n";

pub const NAMES_INPUT: &str = "alice b0b\n";

pub const NAMES_SCRIPT: &str = r#"
word [a-z]+
space
word [a-z0-9]+
newline
eof
"#;

pub const NAMES_UPPER_INPUT: &str = "Alice b0b\n";

pub const CONTESTANT_LOOSE_INPUT: &str = "  1   2   3  \n\n\n";

pub const CONTESTANT_SCRIPT: &str = r#"
int
space
int
space
int
newline
eof
"#;
