//! Conversion vectors for every rendering convention.
//!
//! Each table pins the exact output for one renderer, including the
//! Unicode, replacement-table, and pluralization edge cases.

use libmangler::prelude::*;

fn check(cases: &[(&str, &str)], f: impl Fn(&str) -> String) {
    for (input, expected) in cases {
        assert_eq!(*expected, f(input), "input: {input:?}");
    }
}

#[test]
fn test_to_go_name() {
    let mangler = NameMangler::new();
    check(
        &[
            ("", ""),
            ("sample text", "SampleText"),
            ("sample-text", "SampleText"),
            ("sample_text", "SampleText"),
            ("sampleText", "SampleText"),
            ("sample 2 Text", "Sample2Text"),
            ("findThingById", "FindThingByID"),
            ("findTHINGSbyID", "FindTHINGSbyID"),
            ("id", "ID"),
            ("Id", "ID"),
            ("ID", "ID"),
            ("Http Server", "HTTPServer"),
            ("http", "HTTP"),
            ("utf8", "UTF8"),
            ("Ipv4", "IPv4"),
            ("TTLss", "TTLss"),
            ("get$ref", "GetDollarRef"),
            ("éget$ref", "ÉgetDollarRef"),
            ("x-isAnOptionalHeader0", "XIsAnOptionalHeader0"),
        ],
        |name| mangler.to_go_name(name),
    );
}

#[test]
fn test_to_go_name_prefixes() {
    let mangler = NameMangler::new();
    check(
        &[
            ("ã", "Ã"),
            ("आ", "Xआ"),
            ("3", "X3"),
            ("日本語sample 2 Text", "X日本語sample2Text"),
            ("日get$ref", "X日getDollarRef"),
        ],
        |name| mangler.to_go_name(name),
    );

    let numbered = NameMangler::builder()
        .prefix_fn(|_name| "Nr".to_string())
        .build();
    check(&[("3", "Nr3"), ("आ", "Nrआ")], |name| {
        numbered.to_go_name(name)
    });
}

#[test]
fn test_to_go_name_pluralization() {
    let mangler = NameMangler::new();
    check(
        &[
            ("pluralized initialism IDs", "PluralizedInitialismIDs"),
            ("pluralized initialism IDsX", "PluralizedInitialismIDsX"),
            ("pluralized IDS initialism", "PluralizedIDSInitialism"),
            (
                "pluralized HTTPs is not an initialism",
                "PluralizedHTTPsIsNotAnInitialism",
            ),
        ],
        |name| mangler.to_go_name(name),
    );
}

#[test]
fn test_to_var_name() {
    let mangler = NameMangler::new();
    check(
        &[
            ("", ""),
            ("HTTP", "http"),
            ("sample text", "sampleText"),
            ("findThingById", "findThingByID"),
            ("ID sample", "idSample"),
            ("日本語sample 2 Text", "x日本語sample2Text"),
            ("日get$ref", "x日getDollarRef"),
        ],
        |name| mangler.to_var_name(name),
    );
}

#[test]
fn test_to_file_name_and_command_name() {
    let mangler = NameMangler::new();
    check(
        &[
            ("", ""),
            ("findThingById", "find_thing_by_id"),
            ("FindThingByID", "find_thing_by_id"),
            ("sample 2 Text", "sample_2_text"),
            ("sample-text", "sample_text"),
            ("@sample", "at_sample"),
            ("pluralized initialism IDs", "pluralized_initialism_ids"),
        ],
        |name| mangler.to_file_name(name),
    );
    check(
        &[
            ("sample text", "sample-text"),
            ("findThingById", "find-thing-by-id"),
        ],
        |name| mangler.to_command_name(name),
    );
}

#[test]
fn test_to_human_names() {
    let mangler = NameMangler::new();
    check(
        &[
            ("findThingById", "find thing by Id"),
            ("sample text", "sample text"),
            ("get$ref", "get dollar ref"),
            ("pluralized initialism IDs", "pluralized initialism IDs"),
        ],
        |name| mangler.to_human_name_lower(name),
    );
    check(
        &[
            ("findThingById", "Find Thing By Id"),
            ("sample text", "Sample Text"),
        ],
        |name| mangler.to_human_name_title(name),
    );
}

#[test]
fn test_to_json_name() {
    let mangler = NameMangler::new();
    check(
        &[
            ("", ""),
            ("sample text", "sampleText"),
            ("sample-text", "sampleText"),
            ("findThingById", "findThingById"),
            ("FindThingByID", "findThingById"),
        ],
        |name| mangler.to_json_name(name),
    );
}

#[test]
fn test_camelize() {
    let mangler = NameMangler::new();
    check(
        &[
            ("", ""),
            ("sample text", "Sample text"),
            ("sampleText", "Sampletext"),
            ("CAPWD.folwdBylc", "Capwd.folwdbylc"),
            ("12ab", "12ab"),
        ],
        |name| mangler.camelize(name),
    );
}

#[test]
fn test_uncasable_uppercase_runes_pass_through() {
    // ℂ and 🄰 are uppercase letters with no lowercase mapping; they come
    // out of every renderer unchanged, like any other uncasable rune.
    let mangler = NameMangler::new();
    assert_eq!("ℂ", mangler.to_file_name("ℂ"));
    assert_eq!("ℂ", mangler.to_var_name("ℂ"));
    assert_eq!("ℂ", mangler.to_go_name("ℂ"));
    assert_eq!("🄰", mangler.to_file_name("🄰"));
    assert_eq!("🄰", mangler.to_var_name("🄰"));
    assert_eq!("sample_ℂ_text", mangler.to_file_name("sample ℂ text"));
}

#[test]
fn test_extra_initialisms() {
    let mangler = NameMangler::builder()
        .additional_initialisms(["elb", "cap", "capwd", "wd"])
        .build();

    assert_eq!("ELB", mangler.to_go_name("elb"));
    assert_eq!("elbHTTPLoadBalancer", mangler.to_var_name("ELBHTTPLoadBalancer"));
    assert_eq!("elb_http_load_balancer", mangler.to_file_name("ELBHTTPLoadBalancer"));
    assert_eq!("cap_w_dfolwd_bylc", mangler.to_file_name("CAPWDfolwdBylc"));
    assert_eq!("capWDfolwdBylc", mangler.to_var_name("CAPWDfolwdBylc"));
}

#[test]
fn test_add_initialisms_after_construction() {
    let mangler = NameMangler::new();
    assert_eq!("ELBRule", {
        mangler.add_initialisms(["ELB"]);
        mangler.to_go_name("elb rule")
    });
}

#[test]
fn test_custom_replace_table_replaces_defaults() {
    let mangler = NameMangler::builder()
        .replace_fn(|rune| match rune {
            '+' => Some("Plus ".to_string()),
            '-' | '_' => Some(String::new()),
            _ => None,
        })
        .build();

    assert_eq!("Plus123a", mangler.to_go_name("+123_a"));
    // the default '$' entry is gone; '$' is now a plain separator
    assert_eq!("GetRef", mangler.to_go_name("get$ref"));
}

#[test]
fn test_replaced_initialism_set() {
    let mangler = NameMangler::builder().initialisms(["ELB"]).build();

    assert_eq!("ELB", mangler.to_go_name("elb"));
    // HTTP is no longer registered
    assert_eq!("Http", mangler.to_go_name("Http"));
}
