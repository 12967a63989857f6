use linsys::algebra::*;

fn v(coords: &[f64]) -> Vector {
    Vector::from_f64s(coords).unwrap()
}

fn main() -> Result<(), AlgebraError> {
    let tol = default_tolerance();

    let a = v(&[8.218, -9.341]);
    let b = v(&[-1.129, 2.111]);
    println!("{} + {} = {}", a, b, a.add(&b)?);

    let a = v(&[7.119, 8.215]);
    let b = v(&[-8.223, 0.878]);
    println!("{} - {} = {}", a, b, a.sub(&b)?);

    let a = v(&[1.671, -1.012, -0.318]);
    let c: Decimal = "7.41".parse().unwrap();
    println!("{} * {} = {}", c, a, a.scale(c)?);

    let a = v(&[-0.221, 7.437]);
    println!("|{}| = {:.6}", a, a.magnitude()?);

    let a = v(&[5.581, -2.136]);
    println!("unit {} is {}", a, a.normalize()?);

    let a = v(&[3.183, -7.627]);
    let b = v(&[-2.668, 5.319]);
    println!("angle = {:.6} rad", a.angle(&b)?);

    let a = v(&[7.35, 0.221, 5.188]);
    let b = v(&[2.751, 8.259, 3.985]);
    println!("angle = {:.6} deg", a.angle_degrees(&b)?);

    let a = v(&[-7.579, -7.88]);
    let b = v(&[22.737, 23.64]);
    println!(
        "parallel: {}, orthogonal: {}",
        a.is_parallel_to(&b, tol)?,
        a.is_orthogonal_to(&b, tol)?
    );

    let a = v(&[3.039, 1.879]);
    let b = v(&[0.825, 2.036]);
    println!("projection = {}", a.projection_onto(&b)?);
    println!("orthogonal = {}", a.component_orthogonal_to(&b)?);

    let a = v(&[8.462, 7.893, -8.187]);
    let b = v(&[6.984, -5.975, 4.778]);
    println!("cross = {}", a.cross(&b)?);
    println!("parallelogram area = {:.6}", a.parallelogram_area(&b)?);
    println!("triangle area = {:.6}", a.triangle_area(&b)?);

    Ok(())
}
