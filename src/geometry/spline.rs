//! Curve math for ribbon centerlines.
//!
//! Catmull-Rom sampling with analytic tangents, plus rotation-minimizing
//! frames for stable cross-section orientation. Pure Vec3 → Vec3
//! transforms with no knowledge of secondary structure.

use glam::Vec3;

/// A sample along the fitted centerline with its local frame.
#[derive(Debug, Clone, Copy)]
pub struct CurvePoint {
    /// Sampled position.
    pub position: Vec3,
    /// Unit tangent of the curve at this sample.
    pub tangent: Vec3,
    /// Unit normal, perpendicular to the tangent.
    pub normal: Vec3,
    /// Unit binormal completing the right-handed frame.
    pub binormal: Vec3,
}

/// Sample a Catmull-Rom curve through `points` at uniform parameter
/// spacing, `segments_per_span` steps per control-point span.
///
/// The curve passes through every control point and is C1-continuous;
/// endpoint spans use mirrored phantom points. Two control points fall
/// back to a straight line. Fewer than two control points yield no
/// samples. Normals and binormals are zeroed — call [`orient_frames`]
/// to fill them in.
#[must_use]
pub fn sample_centerline(
    points: &[Vec3],
    segments_per_span: usize,
) -> Vec<CurvePoint> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let segments = segments_per_span.max(1);

    let mut samples = Vec::with_capacity((n - 1) * segments + 1);
    let mut last_tangent = Vec3::X;
    let mut push = |position: Vec3, raw_tangent: Vec3| {
        let tangent = raw_tangent.normalize_or_zero();
        let tangent = if tangent == Vec3::ZERO { last_tangent } else { tangent };
        last_tangent = tangent;
        samples.push(CurvePoint {
            position,
            tangent,
            normal: Vec3::ZERO,
            binormal: Vec3::ZERO,
        });
    };

    if n == 2 {
        let dir = points[1] - points[0];
        for j in 0..=segments {
            let t = j as f32 / segments as f32;
            push(points[0].lerp(points[1], t), dir);
        }
        return samples;
    }

    for i in 0..n - 1 {
        let p0 = if i == 0 {
            points[0] * 2.0 - points[1]
        } else {
            points[i - 1]
        };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 >= n {
            points[n - 1] * 2.0 - points[n - 2]
        } else {
            points[i + 2]
        };

        for j in 0..segments {
            let t = j as f32 / segments as f32;
            push(spline_position(p0, p1, p2, p3, t), spline_tangent(p0, p1, p2, p3, t));
        }
    }

    // Close the final span exactly on the last control point.
    let p0 = points[n - 3];
    let p1 = points[n - 2];
    let p2 = points[n - 1];
    let p3 = points[n - 1] * 2.0 - points[n - 2];
    push(p2, spline_tangent(p0, p1, p2, p3, 1.0));

    samples
}

/// Catmull-Rom basis at parameter `t` for one span.
fn spline_position(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Analytic derivative of [`spline_position`] with respect to `t`.
fn spline_tangent(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    0.5 * ((-p0 + p2)
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * (2.0 * t)
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * (3.0 * t2))
}

/// Fill normals and binormals with rotation-minimizing frames using the
/// double reflection method (Wang et al. 2008). Keeps cross-sections
/// from twisting along the tube.
pub fn orient_frames(samples: &mut [CurvePoint]) {
    let Some(first) = samples.first() else {
        return;
    };

    let t0 = first.tangent;
    let arbitrary = if t0.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let n0 = t0.cross(arbitrary).normalize_or_zero();
    let n0 = if n0 == Vec3::ZERO { Vec3::Z } else { n0 };
    samples[0].normal = n0;
    samples[0].binormal = t0.cross(n0).normalize_or_zero();

    for i in 0..samples.len() - 1 {
        let x_i = samples[i].position;
        let x_j = samples[i + 1].position;
        let t_i = samples[i].tangent;
        let t_j = samples[i + 1].tangent;
        let r_i = samples[i].normal;

        let v1 = x_j - x_i;
        let c1 = v1.dot(v1);
        if c1 < 1e-10 {
            samples[i + 1].normal = r_i;
            samples[i + 1].binormal = samples[i].binormal;
            continue;
        }

        // First reflection: across the plane bisecting the step.
        let r_l = r_i - (2.0 / c1) * v1.dot(r_i) * v1;
        let t_l = t_i - (2.0 / c1) * v1.dot(t_i) * v1;

        // Second reflection: align the reflected tangent with t_j.
        let v2 = t_j - t_l;
        let c2 = v2.dot(v2);
        let r_j = if c2 < 1e-10 {
            r_l
        } else {
            r_l - (2.0 / c2) * v2.dot(r_l) * v2
        };

        let r_j = (r_j - t_j * t_j.dot(r_j)).normalize_or_zero();
        let r_j = if r_j == Vec3::ZERO { samples[i].normal } else { r_j };
        samples[i + 1].normal = r_j;
        samples[i + 1].binormal = t_j.cross(r_j).normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn fewer_than_two_points_yield_nothing() {
        assert!(sample_centerline(&[], 2).is_empty());
        assert!(sample_centerline(&[Vec3::ONE], 2).is_empty());
    }

    #[test]
    fn two_points_sample_a_straight_line() {
        let samples =
            sample_centerline(&[Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)], 2);
        assert_eq!(samples.len(), 3);
        assert!(close(samples[1].position, Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(samples[1].tangent, Vec3::X));
    }

    #[test]
    fn curve_passes_through_every_control_point() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(3.0, 2.5, 1.0),
            Vec3::new(4.0, 0.0, 2.0),
        ];
        let segments = 2;
        let samples = sample_centerline(&points, segments);
        assert_eq!(samples.len(), (points.len() - 1) * segments + 1);
        for (i, &p) in points.iter().enumerate() {
            assert!(close(samples[i * segments].position, p));
        }
    }

    #[test]
    fn sample_count_scales_with_control_points() {
        let points: Vec<Vec3> = (0..10)
            .map(|i| Vec3::new(i as f32, (i as f32).sin(), 0.0))
            .collect();
        let samples = sample_centerline(&points, 2);
        assert_eq!(samples.len(), 2 * points.len() - 1);
    }

    #[test]
    fn frames_are_orthonormal() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.5),
            Vec3::new(2.0, 0.5, 1.5),
            Vec3::new(3.0, 1.5, 2.0),
        ];
        let mut samples = sample_centerline(&points, 3);
        orient_frames(&mut samples);
        for s in &samples {
            assert!((s.tangent.length() - 1.0).abs() < EPS);
            assert!((s.normal.length() - 1.0).abs() < EPS);
            assert!((s.binormal.length() - 1.0).abs() < EPS);
            assert!(s.tangent.dot(s.normal).abs() < EPS);
            assert!(s.tangent.dot(s.binormal).abs() < EPS);
            assert!(s.normal.dot(s.binormal).abs() < EPS);
        }
    }

    #[test]
    fn zero_segments_is_clamped_to_one() {
        let samples =
            sample_centerline(&[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)], 0);
        assert_eq!(samples.len(), 3);
    }
}
