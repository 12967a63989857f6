use linsys::algebra::*;

fn line((a, b, k): (&str, &str, &str)) -> Hyperplane {
    let d = |s: &str| s.parse::<Decimal>().unwrap();
    Hyperplane::from_coefficients(vec![d(a), d(b)], d(k)).unwrap()
}

fn main() -> Result<(), AlgebraError> {
    let tol = default_tolerance();

    let pairs = [
        [("4.046", "2.836", "1.21"), ("10.115", "7.09", "3.025")],
        [("7.204", "3.182", "8.68"), ("8.172", "4.114", "9.883")],
        [("1.182", "5.562", "6.744"), ("1.773", "8.343", "9.525")],
    ];

    for [l1, l2] in pairs.map(|pair| pair.map(line)) {
        println!("{}  and  {}", l1, l2);
        println!("  parallel:   {}", l1.is_parallel_to(&l2, tol)?);
        println!("  coincident: {}", l1.coincides_with(&l2, tol)?);
        match l1.intersection(&l2, tol)? {
            Intersection::Point(p) => println!("  meet at {:.3}, {:.3}", p[0], p[1]),
            Intersection::Coincident => println!("  same line"),
            Intersection::Empty => println!("  no intersection"),
        }
    }

    Ok(())
}
