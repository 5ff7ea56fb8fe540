/// Positional weight per cell, peaking at the center. Summed with the same
/// own-minus-opponent sign convention as material.
pub const POSITION_BONUS: [[f64; 9]; 9] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
];
