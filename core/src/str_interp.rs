use std::{
    borrow::Borrow,
    collections::HashMap,
    ffi::{OsStr, OsString},
    hash::Hash,
};

pub type Result = std::result::Result<OsString, InterpError>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterpError {
    #[error("Undefined variable '{0}' at {}", .1+1)]
    UndefinedVar(String, usize),

    #[error("Unclosed brace (found '#{{' at {})", .0+1)]
    UnclosedBrace(usize),
}

/// Expand `#{name}` in `fmt`. `##` is a literal `#`.
/// Values are spliced as `OsStr`, so non-UTF-8 paths survive.
pub fn interp<K, V>(fmt: &str, variables: &HashMap<K, V>) -> Result
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<OsStr>,
{
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum State {
        Normal,
        HashMark,
        InsideBrace,
    }
    use State::*;

    let mut state = Normal;
    let mut pos_hash_mark = 0;
    let mut res = OsString::with_capacity(fmt.len() * 2);
    let mut var_name = String::with_capacity(32);

    let mut buf = [0u8; 4];
    for (i, c) in fmt.chars().enumerate() {
        match (c, state) {
            ('#', Normal) => {
                state = HashMark;
            }
            ('#', HashMark) => {
                state = Normal;
                res.push("#");
            }
            ('{', HashMark) => {
                state = InsideBrace;
                pos_hash_mark = i - 1;
                var_name.clear();
            }
            ('}', InsideBrace) => {
                state = Normal;
                let Some(value) = variables.get(var_name.as_str()) else {
                    return Err(InterpError::UndefinedVar(var_name, pos_hash_mark));
                };
                res.push(value.as_ref());
            }
            (_, InsideBrace) => {
                var_name.push(c);
            }
            (_, HashMark) => {
                state = Normal;
                res.push("#");
                res.push(c.encode_utf8(&mut buf) as &str);
            }
            (_, Normal) => {
                res.push(c.encode_utf8(&mut buf) as &str);
            }
        }
    }

    match state {
        InsideBrace => Err(InterpError::UnclosedBrace(pos_hash_mark)),
        HashMark => {
            res.push("#");
            Ok(res)
        }
        Normal => Ok(res),
    }
}

/// Expand every element of an argv template.
pub fn interp_args<K, V>(
    args: &[String],
    variables: &HashMap<K, V>,
) -> std::result::Result<Vec<OsString>, InterpError>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<OsStr>,
{
    args.iter().map(|arg| interp(arg, variables)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn vars() -> HashMap<&'static str, &'static str> {
        let mut m = HashMap::new();
        m.insert("srcPath", "problems/2022/1/src/solution1.go");
        m.insert("binPath", "problems/2022/1/bin/solution1");
        m.insert("level", "1");
        m
    }

    #[test]
    fn interp_ok() {
        let vars = vars();
        let s = |fmt: &str| interp(fmt, &vars).unwrap().into_string().unwrap();

        assert_eq!(s("go"), "go");
        assert_eq!(s("#{srcPath}"), vars["srcPath"]);
        assert_eq!(s("-o=#{binPath}"), format!("-o={}", vars["binPath"]));
        assert_eq!(s("#{level}#{level}"), "11");
        assert_eq!(s("abc {level} xyz"), "abc {level} xyz");
        assert_eq!(s("abc # {level} xyz"), "abc # {level} xyz");
        assert_eq!(s("abc ##{level} xyz"), "abc #{level} xyz");
        assert_eq!(s("#"), "#");
        assert_eq!(s("##"), "#");
        assert_eq!(s("###"), "##");
    }

    #[test]
    fn interp_ng() {
        let vars = vars();
        assert_eq!(
            interp("#{srcDir}", &vars).unwrap_err(),
            InterpError::UndefinedVar("srcDir".to_owned(), 0)
        );
        assert_eq!(
            interp("#{level} #{binPath", &vars).unwrap_err(),
            InterpError::UnclosedBrace(9),
        );
    }

    #[test]
    fn interp_args_keeps_arity() {
        let argv = ["go", "build", "-o", "#{binPath}", "#{srcPath}"].map(String::from);
        let out = interp_args(&argv, &vars()).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out[3], OsString::from("problems/2022/1/bin/solution1"));
    }
}
