use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

/// `-mode`, `-mode=4`, `--modified=true` and friends, as Go's flag package
/// spells them.
static GO_STYLE_FLAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--?(file|mode|modified)(?:=(.*))?$").unwrap());

#[derive(Parser, Debug)]
#[command(name = "goutline")]
#[command(about = "Outline the top-level declarations of a Go source file as JSON")]
#[command(version)]
pub struct Args {
    /// Path to the Go file to outline
    #[arg(short = 'f', long = "file", visible_alias = "f")]
    pub file: PathBuf,

    /// Parser mode bitmask: 1 package clause only, 2 imports only, 4 keep
    /// comments, 8 trace. Other bits are accepted and ignored; in particular
    /// 16 does not turn redeclarations into errors. Accepts 0x, 0o, 0b and
    /// leading-zero octal forms.
    #[arg(long, default_value_t = 4, value_parser = parse_mode_bits)]
    pub mode: u32,

    /// Read an archive of unsaved file contents from stdin
    #[arg(long)]
    pub modified: bool,
}

impl Args {
    /// Parses process arguments, accepting single-dash long flags.
    pub fn parse_go_style() -> Self {
        Self::parse_from(normalize_flag_style(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags to the double-dash form clap expects.
///
/// The first item is the program name and is left alone, as is the value
/// following a flag that takes one.
pub fn normalize_flag_style<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter();
    out.extend(args.next());

    let mut expects_value = false;
    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str().filter(|_| !expects_value) else {
            expects_value = false;
            out.push(arg);
            continue;
        };
        if text == "--" {
            out.push(arg);
            out.extend(args.by_ref());
            break;
        }

        let Some(caps) = GO_STYLE_FLAG.captures(text) else {
            expects_value = matches!(text, "-f" | "--f");
            out.push(arg);
            continue;
        };
        let name = &caps[1];
        match (name, caps.get(2).map(|m| m.as_str())) {
            ("modified", None | Some("1" | "t" | "T" | "TRUE" | "true" | "True")) => {
                out.push(OsString::from("--modified"))
            }
            ("modified", Some("0" | "f" | "F" | "FALSE" | "false" | "False")) => {}
            (name, Some(value)) => out.push(OsString::from(format!("--{}={}", name, value))),
            (name, None) => {
                expects_value = true;
                out.push(OsString::from(format!("--{}", name)));
            }
        }
    }
    out
}

/// Unsigned integer in any of Go's literal bases: `0x1f`, `0o17`, `017`,
/// `0b101`, or plain decimal. Underscores between digits are allowed.
fn parse_mode_bits(value: &str) -> Result<u32, String> {
    let digits = value.replace('_', "");
    let (radix, digits) = match digits.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &digits[2..]),
        [b'0', b'o' | b'O', ..] => (8, &digits[2..]),
        [b'0', b'b' | b'B', ..] => (2, &digits[2..]),
        [b'0', _, ..] => (8, &digits[1..]),
        _ => (10, digits.as_str()),
    };
    // `from_str_radix` accepts a sign, Go does not.
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(format!("invalid mode {:?}", value));
    }
    u32::from_str_radix(digits, radix).map_err(|err| format!("invalid mode {:?}: {}", value, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_flag_style(args.iter().map(OsString::from))
            .into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect()
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(normalize_flag_style(args.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn test_single_dash_long_flags() {
        assert_eq!(
            normalized(&["goutline", "-f", "a.go", "-mode", "8", "-modified"]),
            vec!["goutline", "-f", "a.go", "--mode", "8", "--modified"]
        );
        assert_eq!(
            normalized(&["goutline", "-mode=0", "-file=x.go"]),
            vec!["goutline", "--mode=0", "--file=x.go"]
        );
    }

    #[test]
    fn test_flag_values_are_not_rewritten() {
        assert_eq!(
            normalized(&["goutline", "-f", "-mode", "--mode", "-modified"]),
            vec!["goutline", "-f", "-mode", "--mode", "-modified"]
        );
    }

    #[test]
    fn test_boolean_flag_values() {
        assert_eq!(
            normalized(&["goutline", "-modified=true", "-f", "a.go"]),
            vec!["goutline", "--modified", "-f", "a.go"]
        );
        for truthy in ["1", "t", "T", "TRUE", "true", "True"] {
            let flag = format!("-modified={}", truthy);
            assert_eq!(
                normalized(&["goutline", flag.as_str(), "-f", "a.go"]),
                vec!["goutline", "--modified", "-f", "a.go"],
                "{}",
                truthy
            );
        }
        for falsy in ["0", "f", "F", "FALSE", "false", "False"] {
            let flag = format!("-modified={}", falsy);
            assert_eq!(
                normalized(&["goutline", flag.as_str(), "-f", "a.go"]),
                vec!["goutline", "-f", "a.go"],
                "{}",
                falsy
            );
        }
    }

    #[test]
    fn test_unknown_boolean_value_is_rejected() {
        let args = normalize_flag_style(
            ["goutline", "-modified=yes", "-f", "a.go"].iter().map(OsString::from),
        );
        assert_eq!(args[1], OsString::from("--modified=yes"));
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn test_mode_accepts_go_integer_bases() {
        assert_eq!(parse(&["goutline", "-mode", "0x4", "-f", "a.go"]).mode, 4);
        assert_eq!(parse(&["goutline", "-mode=04", "-f", "a.go"]).mode, 4);
        assert_eq!(parse(&["goutline", "--mode", "0o14", "-f", "a.go"]).mode, 12);
        assert_eq!(parse(&["goutline", "--mode", "0b1000", "-f", "a.go"]).mode, 8);
        assert_eq!(parse(&["goutline", "--mode", "0", "-f", "a.go"]).mode, 0);
        assert_eq!(parse(&["goutline", "--mode", "1_2", "-f", "a.go"]).mode, 12);
    }

    #[test]
    fn test_mode_rejects_malformed_values() {
        for bad in ["-1", "+4", "0x", "09", "four"] {
            assert!(
                Args::try_parse_from(["goutline", "--mode", bad, "-f", "a.go"]).is_err(),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["goutline", "-f", "main.go"]);
        assert_eq!(args.file, PathBuf::from("main.go"));
        assert_eq!(args.mode, 4);
        assert!(!args.modified);
    }

    #[test]
    fn test_all_spellings_of_file() {
        for spelling in [
            vec!["goutline", "-f", "a.go"],
            vec!["goutline", "--f", "a.go"],
            vec!["goutline", "--file", "a.go"],
            vec!["goutline", "-file", "a.go"],
            vec!["goutline", "-f=a.go"],
        ] {
            assert_eq!(parse(&spelling).file, PathBuf::from("a.go"), "{:?}", spelling);
        }
    }

    #[test]
    fn test_go_style_mode_and_modified() {
        let args = parse(&["goutline", "-modified", "-mode", "12", "-f", "a.go"]);
        assert!(args.modified);
        assert_eq!(args.mode, 12);
    }

    #[test]
    fn test_file_is_required() {
        assert!(Args::try_parse_from(["goutline"]).is_err());
    }
}
