use md5::{Digest, Md5};

/// Turns the content of a `[[...]]` directive into its replacement text.
pub trait Digester {
    fn digest(&self, content: &str) -> String;
}

/// Lowercase hex MD5 of the UTF-8 bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Digester;

impl Digester for Md5Digester {
    fn digest(&self, content: &str) -> String {
        hex::encode(Md5::digest(content.as_bytes()))
    }
}

impl<F> Digester for F
where
    F: Fn(&str) -> String,
{
    fn digest(&self, content: &str) -> String {
        self(content)
    }
}

#[cfg(test)]
mod tests {
    use crate::digest::*;

    #[test]
    fn test_md5_digester() {
        assert_eq!(Md5Digester.digest(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            Md5Digester.digest("world"),
            "7d793037a0760186574b0282f2f435e7"
        );
        assert_eq!(
            Md5Digester.digest("hello world"),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn test_md5_digester_is_deterministic() {
        let a = Md5Digester.digest("same input");
        let b = Md5Digester.digest("same input");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_closure_digester() {
        let stub = |s: &str| format!("<{}>", s.len());
        assert_eq!(stub.digest("abc"), "<3>");
    }
}
