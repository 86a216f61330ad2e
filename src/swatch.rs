/// A single color and how many of the 10,000 sampled pixels carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
}

impl Swatch {
    pub fn new((red, green, blue): (u8, u8, u8), population: u32) -> Swatch {
        Self {
            red,
            green,
            blue,
            population,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn population(self) -> u32 {
        self.population
    }

    /// Format the color as a lowercase `#rrggbb` hex string.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
