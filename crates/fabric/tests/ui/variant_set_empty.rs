use vfab::variant_set;

#[variant_set(interface = dyn std::fmt::Debug)]
enum Nothing {}

fn main() {}
