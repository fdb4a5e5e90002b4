use std::fmt;

/// Coarse topic bucket used to group generated files and ledger entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Array,
    String,
    Sort,
    Search,
    Map,
    Tree,
    Stack,
    Heap,
    Graphs,
    List,
    Math,
    Other,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 12] = [
        Category::Array,
        Category::String,
        Category::Sort,
        Category::Search,
        Category::Map,
        Category::Tree,
        Category::Stack,
        Category::Heap,
        Category::Graphs,
        Category::List,
        Category::Math,
        Category::Other,
    ];

    /// Directory and module name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Array => "array",
            Category::String => "string",
            Category::Sort => "sort",
            Category::Search => "search",
            Category::Map => "map",
            Category::Tree => "tree",
            Category::Stack => "stack",
            Category::Heap => "heap",
            Category::Graphs => "graphs",
            Category::List => "list",
            Category::Math => "math",
            Category::Other => "other",
        }
    }

    /// Section title in the README ledger. Search and map problems are
    /// listed under the catch-all section.
    pub fn readme_title(&self) -> &'static str {
        match self {
            Category::String => "字符串",
            Category::Array => "数组/队列/集合/映射",
            Category::Stack => "栈",
            Category::Math => "数学",
            Category::Heap => "堆",
            Category::Tree => "树",
            Category::List => "链表",
            Category::Graphs => "图",
            Category::Sort => "排序",
            Category::Search | Category::Map | Category::Other => "其它",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
