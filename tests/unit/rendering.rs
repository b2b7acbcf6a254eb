use ddlforge::builder::{
    SchemaBuilder, datetime, foreign_key, foreign_key_to, identity, int, sql_type, varchar,
};
use ddlforge::model::{ModelError, Schema};
use ddlforge::render::{
    DefaultNaming, Dialect, RenderOptions, SqlServerDialect, SqliteDialect, UnnamedConstraints,
    render_schema, render_schema_with,
};
use rstest::rstest;

fn blog_schema() -> Schema {
    let mut schema = SchemaBuilder::new();
    let users = schema.table("users", Some("Registered accounts"), |t| {
        t.primary_key("id", identity());
        t.required("email", varchar(255)).unique();
        t.required("created_at", datetime()).default("getdate()");
        t.index(None, &["created_at"], &[], None);
    });

    let author = foreign_key_to(&users, false).unwrap();
    schema.table("posts", None, |t| {
        t.primary_key("id", identity());
        t.required_ref("author_id", author);
        t.required("title", varchar(200)).comment("shown in listings");
        t.optional("published_at", datetime());
        t.computed(
            "is_published",
            "case when published_at is null then 0 else 1 end",
        );
        t.check("ck_posts_title", "len(title) > 0");
        t.unique_index(
            Some("ux_posts_title"),
            &["author_id", "title"],
            &["published_at"],
            Some("published_at is not null"),
        );
    });

    schema.build()
}

#[test]
fn test_blog_schema_sql_server() {
    let sql = render_schema(&blog_schema(), None, &SqlServerDialect);

    insta::assert_snapshot!(sql.trim_end(), @r"
-- Registered accounts
create table users
(
    id         int identity
        constraint pk_users primary key,
    email      varchar(255) not null
        constraint uq_users_email unique,
    created_at datetime not null
        constraint df_users_created_at default getdate(),
)
go

create index idx_users_created_at on users (created_at)
go

create table posts
(
    id           int identity
        constraint pk_posts primary key,
    author_id    int not null
        constraint fk_posts_author references users,
    title        varchar(200) not null, -- shown in listings
    published_at datetime,
    is_published as case when published_at is null then 0 else 1 end,
    constraint ck_posts_title
        check (len(title) > 0),
)
go

create unique index ux_posts_title on posts (author_id, title) include (published_at)
    where published_at is not null
go
");
}

#[test]
fn test_blog_schema_sqlite_unnamed() {
    let sql = render_schema(&blog_schema(), Some(&UnnamedConstraints), &SqliteDialect);

    insta::assert_snapshot!(sql.trim_end(), @r"
-- Registered accounts
create table users
(
    id         int identity primary key,
    email      varchar(255) not null unique,
    created_at datetime not null default getdate()
);

create index on users (created_at);

create table posts
(
    id           int identity primary key,
    author_id    int not null
        references users,
    title        varchar(200) not null, -- shown in listings
    published_at datetime,
    is_published as (case when published_at is null then 0 else 1 end),
    constraint ck_posts_title
        check (len(title) > 0)
);

create unique index ux_posts_title on posts (author_id, title) include (published_at)
    where published_at is not null;
");
}

#[test]
fn test_composite_key_and_unique_group() {
    let mut schema = SchemaBuilder::new();
    schema.table("post_tags", None, |t| {
        t.required_ref("post_id", foreign_key("posts", sql_type("int").data_type, true));
        t.required("tag", varchar(40));
        t.composite_primary_key(&["post_id", "tag"]);
        t.unique(&["tag", "post_id"]);
    });

    let sql = render_schema(&schema.build(), None, &SqlServerDialect);

    insta::assert_snapshot!(sql.trim_end(), @r"
create table post_tags
(
    post_id int not null
        constraint fk_post_tags_post references posts on delete cascade,
    tag     varchar(40) not null,
    constraint pk_post_tags primary key (post_id, tag),
    constraint uq_post_tags_tag_post_id
        unique (tag, post_id),
)
go
");
}

#[test]
fn test_foreign_key_primary_key_never_cascades() {
    let mut schema = SchemaBuilder::new();
    schema.table("profile", None, |t| {
        t.primary_key_ref("user_id", foreign_key("users", sql_type("int").data_type, true));
        t.optional_ref("avatar_id", foreign_key("images", sql_type("int").data_type, true));
    });

    let sql = render_schema(&schema.build(), None, &SqlServerDialect);

    insta::assert_snapshot!(sql.trim_end(), @r"
create table profile
(
    user_id   int constraint pk_profile primary key
        constraint fk_profile_user references users,
    avatar_id int
        constraint fk_profile_avatar references images on delete cascade,
)
go
");
}

#[test]
fn test_self_reference_requires_key() {
    let mut schema = SchemaBuilder::new();

    let err = schema
        .try_table("categories", None, |t| {
            let parent = t.foreign_key_self()?;
            t.primary_key("id", int());
            t.optional_ref("parent_id", parent);
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, ModelError::MissingPrimaryKey { ref table } if table == "categories"));

    let categories = schema
        .try_table("categories", None, |t| {
            t.primary_key("id", int());
            let parent = t.foreign_key_self()?;
            t.optional_ref("parent_id", parent);
            Ok(())
        })
        .unwrap();
    let sql = render_schema(&Schema::new(vec![categories]), None, &SqliteDialect);
    assert!(sql.contains("    parent_id int\n        constraint fk_categories_parent references categories\n);"));
}

#[test]
fn test_reserved_and_irregular_names_are_quoted() {
    let mut schema = SchemaBuilder::new();
    schema.table("order", None, |t| {
        t.primary_key("key", int());
        t.required("first name", varchar(50));
        t.required("customer_id", int());
    });
    let schema = schema.build();

    let sqlserver = render_schema(&schema, Some(&UnnamedConstraints), &SqlServerDialect);
    assert!(sqlserver.starts_with("create table [order]\n"));
    assert!(sqlserver.contains("    [key]        int primary key,\n"));
    assert!(sqlserver.contains("    [first name] varchar(50) not null,\n"));
    assert!(sqlserver.contains("    customer_id  int not null,\n"));

    let sqlite = render_schema(&schema, Some(&UnnamedConstraints), &SqliteDialect);
    assert!(sqlite.starts_with("create table \"order\"\n"));
    assert!(sqlite.contains("    \"first name\" varchar(50) not null,\n"));
}

#[test]
fn test_alignment_can_be_disabled() {
    let options = RenderOptions {
        align_columns: false,
    };
    let sql = render_schema_with(&blog_schema(), &DefaultNaming, &SqlServerDialect, &options);

    assert!(sql.contains("\n    id int identity\n"));
    assert!(sql.contains("\n    created_at datetime not null\n"));
    assert!(sql.contains("\n    published_at datetime,\n"));
}

#[rstest]
#[case::sql_server(&SqlServerDialect)]
#[case::sqlite(&SqliteDialect)]
fn test_rendering_is_deterministic(#[case] dialect: &dyn Dialect) {
    let schema = blog_schema();
    let first = render_schema(&schema, None, dialect);
    let second = render_schema(&schema, None, dialect);
    assert_eq!(first, second);
}

#[rstest]
#[case::sql_server(&SqlServerDialect, "\ngo\n")]
#[case::sqlite(&SqliteDialect, ";\n")]
fn test_one_separator_per_statement(#[case] dialect: &dyn Dialect, #[case] terminator: &str) {
    let schema = blog_schema();
    let sql = render_schema(&schema, None, dialect);

    let statements = schema.tables.len() + schema.index_count();
    assert_eq!(sql.matches(terminator).count(), statements);
    assert_eq!(sql.matches("create ").count(), statements);
}

#[test]
fn test_comma_policy_per_dialect() {
    let mut schema = SchemaBuilder::new();
    schema.table("settings", None, |t| {
        t.required("name", varchar(50));
        t.optional("value", varchar(200));
    });
    let schema = schema.build();

    let sqlite = render_schema(&schema, None, &SqliteDialect);
    assert!(sqlite.contains("    name  varchar(50) not null,\n    value varchar(200)\n);"));

    let sqlserver = render_schema(&schema, None, &SqlServerDialect);
    assert!(sqlserver.contains("    name  varchar(50) not null,\n    value varchar(200),\n)"));
}

#[test]
fn test_empty_schema_renders_nothing() {
    assert_eq!(render_schema(&Schema::default(), None, &SqlServerDialect), "");
}
