#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Previous, // Step back one slide
    Next,     // Step forward one slide
}

impl Navigation {
    pub fn delta(self) -> i64 {
        match self {
            Navigation::Previous => -1,
            Navigation::Next => 1,
        }
    }
}
