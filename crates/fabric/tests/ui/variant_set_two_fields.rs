use vfab::variant_set;

#[variant_set(interface = dyn std::fmt::Debug)]
enum Points {
    Flat(i32, i32),
}

fn main() {}
