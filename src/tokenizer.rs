// Split source text into words.
// There is no syntax: any run of non-whitespace is a token,
// so quotes, parentheses and backslashes are ordinary characters.

pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
