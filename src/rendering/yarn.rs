use crossterm::style::Color as CrosstermColor;
use std::cmp::Ordering;

/// A single line of styled text.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Yarn {
    characters: Vec<char>,

    // NOTE: The style vectors are allowed to be shorter than the number of characters.
    colors: Vec<Option<CrosstermColor>>,
    backgrounds: Vec<Option<CrosstermColor>>,
}

impl Yarn {
    /// Return a new yarn of zero length.
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    /// Return a yarn consisting of unstylized spaces of the given length.
    pub fn blank(len: usize) -> Self {
        Self {
            characters: vec![' '; len],
            ..Default::default()
        }
    }

    /// Return a yarn of exactly `len` characters with the string left aligned, truncated with dots
    /// if the string is longer than the length.
    pub fn truncated(string: &str, len: usize) -> Self {
        let count: usize = string.chars().count();
        match count.cmp(&len) {
            Ordering::Greater => {
                if len <= 3 {
                    return Yarn::from(vec!['.'; len]);
                }
                let mut characters: Vec<char> = Vec::with_capacity(len);
                characters.extend(string.chars().take(len - 3));
                characters.extend(['.'; 3]);
                Yarn::from(characters)
            }
            _ => {
                let mut yarn = Yarn::from(string);
                yarn.resize(len);
                yarn
            }
        }
    }

    /// Return the string word wrapped into yarns no longer than `columns`.
    ///
    /// Words longer than a whole line are split.
    pub fn wrapped(string: &str, columns: usize) -> Vec<Self> {
        if columns == 0 {
            return Vec::new();
        }

        let mut lines: Vec<Vec<char>> = Vec::new();
        let mut line: Vec<char> = Vec::new();
        for word in string.split_whitespace() {
            let word: Vec<char> = word.chars().collect();
            if !line.is_empty() && line.len() + 1 + word.len() > columns {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            for chunk in word.chunks(columns) {
                if line.len() + chunk.len() > columns {
                    lines.push(std::mem::take(&mut line));
                }
                line.extend(chunk);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }

        lines.into_iter().map(Yarn::from).collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Add the other yarn to the end of this one and return the new yarn.
    pub fn concat(mut self, other: Self) -> Self {
        let len_before: usize = self.len();
        self.characters.extend(other.characters);

        if !other.colors.is_empty() {
            self.colors.resize(len_before, None);
            self.colors.extend(other.colors);
        }

        if !other.backgrounds.is_empty() {
            self.backgrounds.resize(len_before, None);
            self.backgrounds.extend(other.backgrounds);
        }

        self
    }

    /// Pad with spaces on the right or truncate so that the length is `new_len`.
    pub fn resize(&mut self, new_len: usize) {
        let len = self.len();
        match len.cmp(&new_len) {
            Ordering::Greater => {
                self.characters.truncate(new_len);
                self.colors.truncate(new_len);
                self.backgrounds.truncate(new_len);
            }
            Ordering::Less => {
                self.characters.resize(new_len, ' ');
                // Pads inherit the style of the rest of the yarn when it is uniformly styled.
                if self.colors.len() == len && len > 0 {
                    let last = self.colors[len - 1];
                    self.colors.resize(new_len, last);
                }
                if self.backgrounds.len() == len && len > 0 {
                    let last = self.backgrounds[len - 1];
                    self.backgrounds.resize(new_len, last);
                }
            }
            Ordering::Equal => {}
        }
    }

    /// Return the part of the yarn in `start..end` along with its styles.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end: usize = end.min(self.len());
        let start: usize = start.min(end);
        let cut = |styles: &Vec<Option<CrosstermColor>>| -> Vec<Option<CrosstermColor>> {
            if styles.len() <= start {
                Vec::new()
            } else {
                styles[start..end.min(styles.len())].to_vec()
            }
        };

        Self {
            characters: self.characters[start..end].to_vec(),
            colors: cut(&self.colors),
            backgrounds: cut(&self.backgrounds),
        }
    }

    pub fn color(&mut self, color: CrosstermColor) {
        self.colors = vec![Some(color); self.len()];
    }

    pub fn background(&mut self, color: CrosstermColor) {
        self.backgrounds = vec![Some(color); self.len()];
    }

    pub fn characters(&self) -> &Vec<char> {
        &self.characters
    }

    pub fn colors(&self) -> &Vec<Option<CrosstermColor>> {
        &self.colors
    }

    pub fn backgrounds(&self) -> &Vec<Option<CrosstermColor>> {
        &self.backgrounds
    }
}

impl From<String> for Yarn {
    fn from(string: String) -> Self {
        Yarn::from(string.as_str())
    }
}

impl From<&str> for Yarn {
    fn from(string: &str) -> Self {
        Yarn {
            characters: string.chars().collect(),
            ..Default::default()
        }
    }
}

impl From<Vec<char>> for Yarn {
    fn from(characters: Vec<char>) -> Self {
        Yarn {
            characters,
            ..Default::default()
        }
    }
}
