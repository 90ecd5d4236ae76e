use super::*;
use crate::hull::{graham_scan, Collinear};

fn reader(text: &str) -> TokenReader<&[u8]> {
    TokenReader::new(text.as_bytes())
}

#[test]
fn tokens_span_lines_and_blank_lines() {
    let mut r = reader("  alpha beta\n\n\t gamma  \n");
    assert_eq!(r.next_token().unwrap(), "alpha");
    assert_eq!(r.next_token().unwrap(), "beta");
    assert_eq!(r.next_token().unwrap(), "gamma");
    assert!(matches!(r.next_token(), Err(ReadError::EndOfInput)));
    assert_eq!(r.lines_read(), 3);
}

#[test]
fn typed_accessors() {
    let mut r = reader("42 -9000000000 2.5e-3 xyz\n-7");
    assert_eq!(r.next_int().unwrap(), 42);
    assert_eq!(r.next_long().unwrap(), -9_000_000_000);
    assert!((r.next_double().unwrap() - 2.5e-3).abs() < 1e-15);
    assert_eq!(r.next_char().unwrap(), 'x');
    assert_eq!(r.next_int().unwrap(), -7);
    assert!(matches!(r.next_double(), Err(ReadError::EndOfInput)));
}

#[test]
fn format_errors_carry_the_token() {
    let mut r = reader("3.5 9000000000");
    match r.next_int() {
        Err(ReadError::Format { token, expected }) => {
            assert_eq!(token, "3.5");
            assert_eq!(expected, "i32");
        }
        other => panic!("expected format error, got {other:?}"),
    }
    assert!(matches!(r.next_int(), Err(ReadError::Format { .. })));
}

#[test]
fn next_line_returns_rest_or_following_line() {
    let mut r = reader("1 rest of line\r\nsecond line\n");
    assert_eq!(r.next_int().unwrap(), 1);
    assert_eq!(r.next_line().unwrap(), " rest of line");
    assert_eq!(r.next_line().unwrap(), "second line");
    assert!(matches!(r.next_line(), Err(ReadError::EndOfInput)));
}

#[test]
fn read_point_cloud_feeds_the_hull() {
    let text = "5\n0 0\n4 0\n4 4\n0 4\n1.5 2\n";
    let mut r = reader(text);
    let points = read_point_cloud(&mut r).unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points[4], Point::new(1.5, 2.0));
    let h = graham_scan(&points, Collinear::Drop).unwrap();
    assert_eq!(h.len(), 4);
}

#[test]
fn read_points_rejects_truncated_and_non_finite_input() {
    let mut r = reader("1 2 3");
    assert!(matches!(read_points(&mut r, 2), Err(ReadError::EndOfInput)));

    let mut r = reader("1 NaN");
    assert!(matches!(
        read_points(&mut r, 1),
        Err(ReadError::Format { expected: "finite f64", .. })
    ));

    let mut r = reader("-3\n");
    assert!(matches!(
        read_point_cloud(&mut r),
        Err(ReadError::Format { expected: "point count", .. })
    ));
}

#[test]
fn token_source_is_object_safe() {
    let mut r = reader("2 1 1 2 2");
    let src: &mut dyn TokenSource = &mut r;
    let points = read_point_cloud(src).unwrap();
    assert_eq!(points, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
}
