use path_template::{captures, Part, Reason, Template};

fn reason(pattern: &str) -> Reason {
    Template::try_new(pattern).unwrap_err().reason()
}

#[test]
fn template_equality() {
    let a = Template::new("/foo/:id");
    let b = Template::new("/foo/:id");
    let c = Template::new("/bar/:id");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(Template::new("foo/:id"), a);
}

#[test]
fn template_clone() {
    let t = Template::new("/foo/:id");
    let copy = t.clone();
    assert_eq!(t, copy);

    let changed = copy.without(":id") + "bar";
    assert_eq!(copy, t);
    assert_eq!(changed, Template::new("/foo/bar"));
}

#[test]
fn template_errors() {
    assert_eq!(reason("/folder.format/:file"), Reason::FormatNotLast);
    assert_eq!(reason("/*rest/:file"), Reason::VariableAfterGlob);
    assert_eq!(reason("/*rest/*more"), Reason::MultipleGlobs);
    assert_eq!(reason("/users/:"), Reason::EmptyName);

    let err = Template::try_new("/*rest/*more").unwrap_err();
    assert_eq!(err.to_string(), "multiple *glob not allowed");
}

#[test]
fn template_variable() {
    let t = Template::variable("id").unwrap();
    assert_eq!(t.parts(), &[Part::variable("id")]);
    assert_eq!(t.recognize("42"), Some(captures! { :id => "42" }));
}

#[test]
fn template_parse() {
    let t: Template = "/users/:id".parse().unwrap();
    assert_eq!(t, Template::new("/users/:id"));
    assert!("/a.b/c".parse::<Template>().is_err());
}

#[test]
fn without_literal() {
    let t = Template::new("/foo/:foo/bar/:bar");
    let minus = t.without("foo");
    assert_eq!(minus.render(&captures! { :foo => 1, :bar => 2 }), "/1/bar/2");
}

#[test]
fn without_variable() {
    let t = Template::new("/foo/:foo/bar/:bar");
    let minus = t.without(":foo");
    assert_eq!(minus.render(&captures! { :bar => 1 }), "/foo/bar/1");

    let minus = t.without_part(&Part::variable("foo"));
    assert_eq!(minus, Template::new("/foo/bar/:bar"));
}

#[test]
fn without_removes_first_match_only() {
    let t = Template::new("/a/b/a");
    assert_eq!(t.without("a"), Template::new("/b/a"));
    assert_eq!(t.without("/a"), Template::new("/b/a"));
    assert_eq!(t.without("missing"), t);
}

#[test]
fn without_leaves_template_untouched() {
    let t = Template::new("/foo/:foo/bar/:bar");
    let minus = t.without("foo");

    let params = captures! { :foo => 1, :bar => 2 };
    assert_eq!(minus.render(&params), "/1/bar/2");
    assert_eq!(t.render(&params), "/foo/1/bar/2");
}

#[test]
fn without_aliased_as_minus() {
    let t = Template::new("/foo/:foo/bar/:bar");
    let result = (&t - "foo").render(&captures! { :foo => 1, :bar => 2 });
    assert_eq!(result, "/1/bar/2");
}

#[test]
fn plus_with_string() {
    let a = Template::new("/foo/:bar/baz/:qux");
    let b = Template::new("/foo/:bar");

    assert_eq!(a, &b + "/baz/:qux");
    assert_eq!(b, Template::new("/foo/:bar"));
    assert_eq!(
        (&b + "/baz/:qux").render(&captures! { :bar => 1, :qux => 2 }),
        "/foo/1/baz/2"
    );
    assert_eq!(&b + "baz", Template::new("/foo/:bar/baz"));
}

#[test]
fn plus_validates_result() {
    let t = Template::new("/:a.fmt");
    assert_eq!(t.try_concat(":b").unwrap_err().reason(), Reason::FormatNotLast);

    let t = Template::new("/files/*path");
    assert_eq!(t.try_concat("/:name").unwrap_err().reason(), Reason::VariableAfterGlob);
    assert_eq!(t.try_concat("*more").unwrap_err().reason(), Reason::MultipleGlobs);
    assert_eq!(t.try_concat(".format").unwrap(), Template::new("/files/*path.format"));
}

#[test]
#[should_panic(expected = "format must be last")]
fn plus_panics_on_bad_result() {
    let _ = Template::new("/:a.fmt") + ":b";
}
