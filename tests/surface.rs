use folio_fx::config::{FieldConfig, SurfaceConfig};
use folio_fx::field::{ShaderField, QUAD_VERTICES};
use folio_fx::lifecycle::{FrameClock, Size};
use folio_fx::palette::{NEON_CYAN, NEON_PURPLE};
use folio_fx::surface::DottedSurface;
use glam::Vec4;

const VIEW: Size = Size {
    width: 800,
    height: 600,
};

#[test]
fn grid_is_allocated_once_and_centred() {
    let surface = DottedSurface::new(&SurfaceConfig::default(), VIEW);
    assert_eq!(surface.point_count(), 20_000);
    assert_eq!(surface.positions().len(), 60_000);
    assert_eq!(surface.colors().len(), 60_000);

    let p = surface.positions();
    assert_eq!((p[0], p[1], p[2]), (-300.0, 0.0, -150.0));
    let last = p.len() - 3;
    assert_eq!((p[last], p[last + 2]), (297.0, 147.0));
}

#[test]
fn colours_run_purple_to_cyan_across_columns() {
    let surface = DottedSurface::new(&SurfaceConfig::default(), VIEW);
    let c = surface.colors();
    assert_eq!(&c[..3], &NEON_PURPLE.to_unit());

    let last = &c[c.len() - 3..];
    let cyan = NEON_CYAN.to_unit();
    for (a, b) in last.iter().zip(cyan) {
        assert!((a - b).abs() < 0.01);
    }
}

#[test]
fn heights_follow_two_waves() {
    let mut surface = DottedSurface::new(&SurfaceConfig::default(), VIEW);
    surface.update(0.0);
    assert_eq!(surface.height_at(0, 0), 0.0);

    surface.update(2.5);
    let expected = (3.0f32 * 0.3 + 2.5 * 0.8).sin() * 4.0 + (7.0f32 * 0.4 + 2.5 * 0.6).sin() * 4.0;
    assert!((surface.height_at(3, 7) - expected).abs() < 1e-4);

    for y in surface.positions().iter().skip(1).step_by(3) {
        assert!(y.abs() <= 8.0);
    }
}

#[test]
fn update_moves_heights_only() {
    let mut surface = DottedSurface::new(&SurfaceConfig::default(), VIEW);
    let before = surface.positions().to_vec();
    surface.update(1.0);
    for (i, (a, b)) in before.iter().zip(surface.positions()).enumerate() {
        if i % 3 != 1 {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn resize_updates_projection_only() {
    let mut surface = DottedSurface::new(&SurfaceConfig::default(), VIEW);
    surface.update(1.0);
    let heights = surface.positions().to_vec();

    surface.resize(Size {
        width: 1200,
        height: 400,
    });
    assert_eq!(surface.camera().aspect, 3.0);
    assert_eq!(surface.positions(), &heights[..]);
}

#[test]
fn camera_sees_the_surface_centre() {
    let surface = DottedSurface::new(&SurfaceConfig::default(), VIEW);
    let camera = surface.camera();
    let clip = camera.projection() * camera.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(clip.w > 0.0);
    assert!(ndc.x.abs() < 1e-4);
    assert!(ndc.y.abs() < 1.0 && ndc.z.abs() < 1.0);
}

#[test]
fn field_uniforms_track_time_and_size() {
    let mut field = ShaderField::new(&FieldConfig::default(), VIEW);
    assert_eq!(field.uniforms().resolution, [800.0, 600.0]);
    assert_eq!(field.uniforms().opacity, 0.15);

    let mut clock = FrameClock::new();
    field.advance(&clock.tick(1_000.0));
    assert_eq!(field.uniforms().time, 0.0);
    field.advance(&clock.tick(3_500.0));
    assert_eq!(field.uniforms().time, 2.5);

    field.resize(Size {
        width: 1200,
        height: 400,
    });
    assert_eq!(field.uniforms().resolution, [1200.0, 400.0]);
    assert_eq!(field.uniforms().time, 2.5);
}

#[test]
fn quad_covers_clip_space() {
    assert_eq!(QUAD_VERTICES.len(), 12);
    assert!(QUAD_VERTICES.iter().all(|v| v.abs() == 1.0));
}
