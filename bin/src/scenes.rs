//! Demo scenes

use core::color::{Color, BLACK, WHITE};
use core::common::{PI, PI_OVER_FOUR, PI_OVER_TWO};
use core::geometry::{
    point, rotation_x, rotation_y, rotation_z, scaling, translation, vector, view_transform,
    Matrix4x4,
};
use core::light::PointLight;
use core::material::Material;
use core::pattern::Pattern;
use integrators::Scene;
use shapes::{load_obj_file, Cone, Cube, Cylinder, Geometry, Group, Plane, Sphere};

/// Builds a named demo scene and the view transformation it is meant to
/// be seen through.
///
/// * `name` - The scene name.
/// * `obj`  - Mesh file path, required by the `obj` scene.
pub fn build(name: &str, obj: Option<&str>) -> Result<(Scene, Matrix4x4), String> {
    match name {
        "spheres" => Ok(spheres()),
        "shapes" => Ok(shapes()),
        "obj" => {
            let path = obj.ok_or("The 'obj' scene needs a mesh file argument.".to_string())?;
            obj_mesh(path)
        }
        _ => Err(format!("Unknown scene '{name}'.")),
    }
}

/// Three spheres over a reflective checkered floor, the middle one made
/// of glass.
fn spheres() -> (Scene, Matrix4x4) {
    let light = PointLight::new(point(-10.0, 10.0, -10.0), WHITE);
    let mut scene = Scene::new(light);

    let floor = scene.shapes.add(Geometry::Plane(Plane));
    scene.shapes.get_mut(floor).material = Material {
        pattern: Some(Pattern::checker(WHITE, Color::new(0.2, 0.2, 0.2))),
        specular: 0.0,
        reflective: 0.2,
        ..Material::new()
    };

    let wall = scene.shapes.add(Geometry::Plane(Plane));
    scene
        .shapes
        .get_mut(wall)
        .set_transform(translation(0.0, 0.0, 6.0) * rotation_x(PI_OVER_TWO));
    scene.shapes.get_mut(wall).material = Material {
        pattern: Some(
            Pattern::ring(Color::new(0.6, 0.6, 0.6), Color::new(0.3, 0.3, 0.3))
                .with_transform(scaling(0.5, 0.5, 0.5)),
        ),
        specular: 0.0,
        ..Material::new()
    };

    let middle = scene.shapes.add(Geometry::Sphere(Sphere));
    scene
        .shapes
        .get_mut(middle)
        .set_transform(translation(-0.5, 1.0, 0.5));
    scene.shapes.get_mut(middle).material = Material {
        color: BLACK,
        diffuse: 0.1,
        specular: 1.0,
        shininess: 300.0,
        reflective: 0.9,
        ..Material::glass()
    };

    let right = scene.shapes.add(Geometry::Sphere(Sphere));
    scene
        .shapes
        .get_mut(right)
        .set_transform(translation(1.5, 0.5, -0.5) * scaling(0.5, 0.5, 0.5));
    scene.shapes.get_mut(right).material = Material {
        pattern: Some(
            Pattern::stripe(Color::new(0.1, 1.0, 0.5), Color::new(0.0, 0.4, 0.2))
                .with_transform(rotation_z(PI_OVER_FOUR) * scaling(0.2, 0.2, 0.2)),
        ),
        diffuse: 0.7,
        specular: 0.3,
        ..Material::new()
    };

    let left = scene.shapes.add(Geometry::Sphere(Sphere));
    scene
        .shapes
        .get_mut(left)
        .set_transform(translation(-1.5, 0.33, -0.75) * scaling(0.33, 0.33, 0.33));
    scene.shapes.get_mut(left).material = Material {
        pattern: Some(
            Pattern::gradient(Color::new(1.0, 0.8, 0.1), Color::new(0.8, 0.1, 0.1))
                .with_transform(translation(1.0, 0.0, 0.0) * scaling(2.0, 2.0, 2.0)),
        ),
        diffuse: 0.7,
        specular: 0.3,
        ..Material::new()
    };

    let view = view_transform(
        point(0.0, 1.5, -5.0),
        point(0.0, 1.0, 0.0),
        vector(0.0, 1.0, 0.0),
    );
    (scene, view)
}

/// One of every bounded primitive: a cube, a capped cylinder, a cone and
/// a small group of spheres.
fn shapes() -> (Scene, Matrix4x4) {
    let light = PointLight::new(point(-10.0, 12.0, -10.0), WHITE);
    let mut scene = Scene::new(light);

    let floor = scene.shapes.add(Geometry::Plane(Plane));
    scene.shapes.get_mut(floor).material = Material {
        pattern: Some(Pattern::checker(
            Color::new(0.9, 0.9, 0.9),
            Color::new(0.4, 0.4, 0.4),
        )),
        specular: 0.0,
        ..Material::new()
    };

    let cube = scene.shapes.add(Geometry::Cube(Cube));
    scene
        .shapes
        .get_mut(cube)
        .set_transform(translation(-2.5, 0.5, 1.0) * rotation_y(PI / 6.0) * scaling(0.5, 0.5, 0.5));
    scene.shapes.get_mut(cube).material.color = Color::new(0.9, 0.2, 0.2);

    let cylinder = scene
        .shapes
        .add(Geometry::Cylinder(Cylinder::new(0.0, 1.5, true)));
    scene
        .shapes
        .get_mut(cylinder)
        .set_transform(translation(0.0, 0.0, 1.0) * scaling(0.5, 1.0, 0.5));
    scene.shapes.get_mut(cylinder).material.color = Color::new(0.2, 0.6, 0.9);

    let cone = scene
        .shapes
        .add(Geometry::Cone(Cone::new(-1.0, 0.0, true)));
    scene
        .shapes
        .get_mut(cone)
        .set_transform(translation(2.5, 1.0, 1.0) * scaling(0.5, 1.0, 0.5));
    scene.shapes.get_mut(cone).material.color = Color::new(0.9, 0.7, 0.1);

    let group = scene.shapes.add(Geometry::Group(Group::new()));
    scene
        .shapes
        .get_mut(group)
        .set_transform(translation(0.0, 0.5, -1.5) * scaling(0.3, 0.3, 0.3));
    for i in 0..3 {
        let member = scene.shapes.add(Geometry::Sphere(Sphere));
        scene
            .shapes
            .get_mut(member)
            .set_transform(translation(2.0 * i as core::common::Float - 2.0, 0.0, 0.0));
        scene.shapes.get_mut(member).material.color = Color::new(0.3, 0.9, 0.4);
        scene.shapes.add_child(group, member);
    }

    let view = view_transform(
        point(0.0, 2.5, -6.0),
        point(0.0, 0.75, 0.0),
        vector(0.0, 1.0, 0.0),
    );
    (scene, view)
}

/// A mesh loaded from an OBJ file, standing on a plain floor.
fn obj_mesh(path: &str) -> Result<(Scene, Matrix4x4), String> {
    let light = PointLight::new(point(-10.0, 10.0, -10.0), WHITE);
    let mut scene = Scene::new(light);

    let floor = scene.shapes.add(Geometry::Plane(Plane));
    scene.shapes.get_mut(floor).material = Material {
        color: Color::new(0.8, 0.8, 0.85),
        specular: 0.0,
        ..Material::new()
    };

    let mesh = load_obj_file(path, &mut scene.shapes)?;
    scene
        .shapes
        .get_mut(mesh.root)
        .set_transform(rotation_y(PI / 8.0));

    let view = view_transform(
        point(0.0, 2.0, -6.0),
        point(0.0, 1.0, 0.0),
        vector(0.0, 1.0, 0.0),
    );
    Ok((scene, view))
}
