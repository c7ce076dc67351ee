use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// 照合用にテキストを正規化する。
///
/// 小文字化・前後の空白除去のあと、正準分解 (NFD) して結合文字を取り除く。
/// `"Cuéntame"` と `"CUENTAME"` は同じ `"cuentame"` になる。
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_whitespace_and_accents() {
        assert_eq!(normalize("  Cuéntame un DATO Interesante \n"), "cuentame un dato interesante");
        assert_eq!(normalize("Pediatría"), "pediatria");
        assert_eq!(normalize("ÑANDÚ"), "nandu");
    }

    #[test]
    fn variants_collapse_to_same_form() {
        let a = normalize("¿Quién eres?");
        let b = normalize("¿QUIEN ERES?");
        let c = normalize("¿quién eres?");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn leaves_plain_ascii_alone() {
        assert_eq!(normalize("python"), "python");
        assert_eq!(normalize(""), "");
    }
}
