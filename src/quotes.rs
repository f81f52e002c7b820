use rand::Rng;

/// The full quote collection, in the order it is served
pub const QUOTES: [&str; 15] = [
    "Stay hungry, stay foolish.",
    "Code is like humor. When you have to explain it, it's bad.",
    "Simplicity is the soul of efficiency.",
    "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
    "The best way to get a project done faster is to start sooner.",
    "First, solve the problem. Then, write the code.",
    "Experience is the name everyone gives to their mistakes.",
    "In order to be irreplaceable, one must always be different.",
    "Java is to JavaScript what car is to Carpet.",
    "Knowledge is power.",
    "The function of good software is to make the complex appear to be simple.",
    "Before software can be reusable it first has to be usable.",
    "Make it work, make it right, make it fast.",
    "Clean code always looks like it was written by someone who cares.",
    "Programs must be written for people to read, and only incidentally for machines to execute.",
];

/// Read-only view over the quote collection
///
/// Holds a `'static` slice, so copies are free and every request shares
/// the same data without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct QuoteStore {
    quotes: &'static [&'static str],
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self { quotes: &QUOTES }
    }
}

impl QuoteStore {
    /// All quotes in their fixed order
    pub fn all(&self) -> &'static [&'static str] {
        self.quotes
    }

    /// Pick one quote, drawing the index uniformly from `[0, len)`
    ///
    /// Each call is independent of the previous ones. Callers supply the
    /// generator: handlers pass `rand::thread_rng()`, tests pass a seeded one.
    pub fn random_with<R: Rng>(&self, rng: &mut R) -> &'static str {
        let index = rng.gen_range(0..self.quotes.len());
        self.quotes[index]
    }

    /// Pick one quote using the thread-local generator
    pub fn random(&self) -> &'static str {
        self.random_with(&mut rand::thread_rng())
    }
}
