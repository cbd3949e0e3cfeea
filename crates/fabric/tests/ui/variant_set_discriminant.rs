use vfab::variant_set;

#[variant_set(interface = dyn std::fmt::Debug)]
enum Levels {
    Low(u8) = 3,
}

fn main() {}
