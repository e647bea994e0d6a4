//! Secret-code generation.

use crate::core::{Code, GameRng, Palette};

/// Draw `num_slots` colors uniformly, with replacement, from `palette`.
///
/// Repeats are expected; there is no balancing of the color distribution.
/// `num_slots == 0` is a caller error and yields an empty code.
///
/// ```
/// use mastermind_engine::core::{GameRng, Palette};
/// use mastermind_engine::generator::generate;
///
/// let palette = Palette::new(4).unwrap();
/// let code = generate(6, palette, &mut GameRng::new(1));
/// assert_eq!(code.len(), 6);
/// assert!(code.iter().all(|c| palette.contains(c)));
/// ```
pub fn generate(num_slots: usize, palette: Palette, rng: &mut GameRng) -> Code {
    debug_assert!(num_slots >= 1, "a code needs at least one slot");
    let colors = palette.colors();
    // a palette always holds at least one color, so every draw succeeds
    (0..num_slots)
        .filter_map(|_| rng.choose(colors).copied())
        .collect()
}
