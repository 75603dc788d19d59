use stab_tests::fixture;

fixture!(scenario, "scenario");
fixture!(single, "single");
fixture!(nested, "nested");
fixture!(disjoint, "disjoint");
fixture!(degenerate, "degenerate");
