use crate::geometry::SpiralParameters;

/// Returns the drawing file name for a coil.
///
/// Layout: `coil_{turns}t_{od}od_{id}id_{smin}smin_{smax}smax[_r].svg`, with
/// diameters rounded to whole millimetres and stitch lengths given in tenths
/// of a millimetre. Halves round to even.
#[must_use]
pub fn coil_file_name(params: &SpiralParameters) -> String {
    let mut name = format!(
        "coil_{}t_{}od_{}id_{}smin_{}smax",
        params.turns,
        params.outer_diameter.round_ties_even(),
        params.inner_diameter.round_ties_even(),
        (params.stitch_min * 10.0).round_ties_even(),
        (params.stitch_max * 10.0).round_ties_even(),
    );
    if params.reverse {
        name.push_str("_r");
    }
    name.push_str(".svg");
    name
}
