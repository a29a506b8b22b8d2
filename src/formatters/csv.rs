use crate::types::Report;

pub fn format(r: &Report) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    out.push_str("x,y,z,overlap,fast,slow,agree\n");
    let _ = write!(
        out,
        "{},{},{},{},{},{},{}",
        r.x,
        r.y,
        r.z,
        r.overlap,
        r.fast_total,
        r.slow_total,
        r.agree
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combiner::OverlapTerm;

    #[test]
    fn single_row_after_header() {
        let r = Report {
            x: 2,
            y: 4,
            z: 10,
            overlap: OverlapTerm::Product,
            fast_total: 24,
            slow_total: 24,
            agree: true,
        };
        assert_eq!(format(&r), "x,y,z,overlap,fast,slow,agree\n2,4,10,product,24,24,true");
    }
}
