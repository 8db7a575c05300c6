/// Caption for a figure file stem: underscores become spaces, then each word
/// is title-cased. A letter is uppercased when it follows a non-letter and
/// lowercased otherwise, so `paso1a_qc` becomes `Paso1A Qc`.
pub fn display_name(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut previous_is_letter = false;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if previous_is_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            name.push(c);
            previous_is_letter = false;
        }
    }
    name
}
