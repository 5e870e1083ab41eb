//! Token domains shared by several components.

token_enum! {
    /// Spacing step between children (Stack, Grid).
    pub enum Gap ("gap") {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default Md
}

token_enum! {
    /// Horizontal padding step (Container pad, Section inset).
    pub enum Pad ("padding") {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
    default Md
}

token_enum! {
    /// Surface color of a Section.
    pub enum Background ("background") {
        Default => "default",
        Muted => "muted",
        Accent => "accent",
        Primary => "primary",
    }
    default Default
}

token_enum! {
    /// Color intent of a block, emitted as `data-tone`.
    pub enum Tone ("tone") {
        Default => "default",
        Primary => "primary",
        Muted => "muted",
        Contrast => "contrast",
    }
    default Default
}
