use crate::models::Category;

/// Label used when a problem carries no tags at all.
const UNKNOWN_TAG: &str = "未知";

/// Categories decisive enough to win over tag order, highest priority first.
const OVERRIDES: [Category; 5] = [
    Category::Sort,
    Category::Graphs,
    Category::Stack,
    Category::Heap,
    Category::List,
];

/// Resolve a problem's tag list to exactly one category.
pub fn classify<S: AsRef<str>>(tags: &[S]) -> Category {
    if tags.is_empty() {
        return lookup(UNKNOWN_TAG).unwrap_or(Category::Other);
    }

    let mapped: Vec<Category> = tags
        .iter()
        .map(|t| lookup(t.as_ref().trim()).unwrap_or(Category::Other))
        .collect();

    if let Some(winner) = OVERRIDES.iter().find(|c| mapped.contains(c)) {
        return *winner;
    }

    mapped
        .into_iter()
        .find(|c| *c != Category::Other)
        .unwrap_or(Category::Other)
}

/// Fixed label table. Unknown labels return `None`.
pub fn lookup(label: &str) -> Option<Category> {
    let category = match label {
        "数组" | "矩阵" | "枚举" | "有序集合" | "队列" | "单调队列" | "树状数组" | "后缀数组" => {
            Category::Array
        }
        "Array" | "Matrix" | "Enumeration" | "Ordered Set" | "Queue" | "Monotonic Queue"
        | "Binary Indexed Tree" | "Suffix Array" => Category::Array,

        "字符串" | "字符串匹配" => Category::String,
        "String" | "String Matching" => Category::String,

        "排序" | "桶排序" | "计数排序" | "基数排序" | "归并排序" | "拓扑排序" | "递归" => {
            Category::Sort
        }
        "Sorting" | "Bucket Sort" | "Counting Sort" | "Radix Sort" | "Merge Sort"
        | "Topological Sort" | "Recursion" => Category::Sort,

        "深度优先搜索" | "广度优先搜索" | "二分查找" | "记忆化搜索" | "快速选择" => {
            Category::Search
        }
        "Depth-First Search" | "Breadth-First Search" | "Binary Search" | "Memoization"
        | "Quickselect" => Category::Search,

        "哈希表" | "Hash Table" => Category::Map,

        "树" | "二叉树" | "二叉搜索树" | "最小生成树" | "字典树" | "线段树" => Category::Tree,
        "Tree" | "Binary Tree" | "Binary Search Tree" | "Minimum Spanning Tree" | "Trie"
        | "Segment Tree" => Category::Tree,

        "栈" | "单调栈" | "Stack" | "Monotonic Stack" => Category::Stack,

        "堆（优先队列）" | "Heap (Priority Queue)" => Category::Heap,

        "图" | "Graph" => Category::Graphs,

        "链表" | "双向链表" | "Linked List" | "Doubly-Linked List" => Category::List,

        "位运算" | "前缀和" | "计数" | "数学" | "几何" | "博弈" | "组合数学" | "数论" | "随机化"
        | "概率与统计" | "水塘抽样" | "拒绝采样" => Category::Math,
        "Bit Manipulation" | "Prefix Sum" | "Counting" | "Math" | "Geometry" | "Game Theory"
        | "Combinatorics" | "Number Theory" | "Randomized" | "Probability and Statistics"
        | "Reservoir Sampling" | "Rejection Sampling" => Category::Math,

        "模拟" | "动态规划" | "贪心" | "回溯" | "分治" | "最短路" | "欧拉回路" | "双连通分量"
        | "强连通分量" | "并查集" | "双指针" | "滑动窗口" | "状态压缩" | "哈希函数" | "滚动哈希"
        | "扫描线" | "数据库" | "设计" | "数据流" | "交互" | "脑筋急转弯" | "迭代器" | "多线程"
        | "Shell" | UNKNOWN_TAG => Category::Other,

        _ => return None,
    };
    Some(category)
}
