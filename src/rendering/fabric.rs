use super::{Location, Size, Yarn};

/// A screen's worth of styled characters.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Fabric {
    size: Size,
    rows: Vec<Yarn>,
}

impl Fabric {
    /// Return a blank fabric of the given size.
    pub fn new(size: Size) -> Self {
        let rows = vec![Yarn::blank(size.columns); size.rows];
        Fabric { size, rows }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rows(&self) -> &Vec<Yarn> {
        &self.rows
    }

    /// Draw the yarn starting at the location. Anything that does not fit is clipped.
    pub fn write(&mut self, yarn: &Yarn, location: Location) {
        if location.row >= self.size.rows || location.column >= self.size.columns {
            return;
        }

        let visible: usize = yarn.len().min(self.size.columns - location.column);
        let row: &Yarn = &self.rows[location.row];
        let before: Yarn = row.slice(0, location.column);
        let after: Yarn = row.slice(location.column + visible, self.size.columns);

        let mut middle: Yarn = yarn.clone();
        middle.resize(visible);

        self.rows[location.row] = before.concat(middle).concat(after);
    }

    /// Draw the yarns on consecutive rows starting at the location.
    pub fn write_all<'a>(&mut self, yarns: impl IntoIterator<Item = &'a Yarn>, location: Location) {
        for (offset, yarn) in yarns.into_iter().enumerate() {
            self.write(yarn, Location::new(location.row + offset, location.column));
        }
    }

    /// Draw another fabric over this one with its top left corner at the location.
    pub fn overlay(&mut self, other: &Fabric, location: Location) {
        self.write_all(other.rows.iter(), location);
    }

    /// Return the characters of a row as a string (trailing spaces included).
    pub fn line(&self, row: usize) -> String {
        match self.rows.get(row) {
            Some(yarn) => yarn.characters().iter().collect(),
            None => String::new(),
        }
    }
}

impl From<Vec<Yarn>> for Fabric {
    fn from(rows: Vec<Yarn>) -> Self {
        let columns: usize = rows.iter().map(Yarn::len).max().unwrap_or(0);
        let mut fabric = Fabric::new(Size::new(rows.len(), columns));
        fabric.write_all(rows.iter(), Location::default());
        fabric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::style::Color;
    use test_case::test_case;

    #[test_case(Location::new(0, 0), vec!["ab   ", "     "]; "at the top left corner")]
    #[test_case(Location::new(1, 2), vec!["     ", "  ab "]; "in the middle")]
    #[test_case(Location::new(0, 4), vec!["    a", "     "]; "clipped on the right")]
    #[test_case(Location::new(2, 0), vec!["     ", "     "]; "below the fabric")]
    fn test_write(location: Location, expected: Vec<&str>) {
        let mut fabric = Fabric::new(Size::new(2, 5));

        fabric.write(&Yarn::from("ab"), location);

        let lines: Vec<String> = (0..2).map(|row| fabric.line(row)).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_write_keeps_styles_around_the_yarn() {
        let mut fabric = Fabric::new(Size::new(1, 4));
        let mut background = Yarn::blank(4);
        background.background(Color::Yellow);
        fabric.write(&background, Location::default());

        fabric.write(&Yarn::from("x"), Location::new(0, 1));

        let backgrounds = fabric.rows()[0].backgrounds().clone();
        assert_eq!(backgrounds[0], Some(Color::Yellow));
        assert_eq!(backgrounds[2], Some(Color::Yellow));
        assert_eq!(fabric.line(0), " x  ");
    }

    #[test]
    fn test_overlay() {
        let mut fabric = Fabric::new(Size::new(3, 3));
        let other = Fabric::from(vec![Yarn::from("xy"), Yarn::from("z")]);

        fabric.overlay(&other, Location::new(1, 1));

        assert_eq!(fabric.line(0), "   ");
        assert_eq!(fabric.line(1), " xy");
        assert_eq!(fabric.line(2), " z ");
    }
}
