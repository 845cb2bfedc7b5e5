//! Canned definition dictionary for the definition rule. Terms are matched
//! case-insensitively against the already-lowercased remainder of the message.

pub(crate) fn lookup(term: &str) -> Option<&'static str> {
    let definition = match term {
        "javascript" => "JavaScript is a versatile programming language used to make web pages interactive. It runs in the browser and on servers using Node.js.",
        "react" => "React is a powerful open-source JavaScript library for building user interfaces, especially single-page applications. It's maintained by Meta (Facebook).",
        "api" => "An API (Application Programming Interface) is a set of rules and protocols that allows different software applications to communicate with each other.",
        "cloud computing" => "Cloud computing delivers on-demand computing services—from applications to storage and processing power—typically over the internet with pay-as-you-go pricing.",
        "ai" | "artificial intelligence" => "Artificial intelligence (AI) refers to the simulation of human intelligence in machines that are programmed to think like humans and mimic their actions.",
        "machine learning" => "Machine learning is a subset of AI that allows systems to learn and improve from data without being explicitly programmed.",
        "database" => "A database is an organized collection of data, generally stored and accessed electronically from a computer system.",
        "frontend" => "Frontend development involves creating the visual parts of a website or application that users interact with, using HTML, CSS, and JavaScript.",
        "backend" => "Backend development refers to server-side logic, databases, and APIs that power the functionality of web applications behind the scenes.",
        "nodejs" => "Node.js is a JavaScript runtime built on Chrome's V8 engine that allows you to run JavaScript code server-side.",
        "typescript" => "TypeScript is a superset of JavaScript that adds static typing, making code more maintainable and error-resistant.",
        "rest api" => "A REST API is a web service that follows REST (Representational State Transfer) principles, allowing clients to interact with resources using standard HTTP methods.",
        "json" => "JSON (JavaScript Object Notation) is a lightweight data format used to exchange data between a server and client.",
        "docker" => "Docker is a platform that packages applications and their dependencies into containers, making them portable and consistent across environments.",
        "kubernetes" => "Kubernetes is an open-source container orchestration system for automating the deployment, scaling, and management of containerized applications.",
        "graphql" => "GraphQL is a query language for your API that allows clients to request exactly the data they need and nothing more.",
        "jwt" => "JWT (JSON Web Token) is a compact, URL-safe way to represent claims securely between two parties, commonly used for authentication.",
        "react native" => "React Native is a framework developed by Meta for building native mobile apps using React and JavaScript.",
        "vite" => "Vite is a next-generation frontend build tool that offers lightning-fast development experience and optimized production builds.",
        "next.js" => "Next.js is a React framework that enables server-side rendering, static site generation, and seamless routing out of the box.",
        "tailwind css" => "Tailwind CSS is a utility-first CSS framework for building custom designs directly in your markup.",
        "redux" => "Redux is a predictable state container for JavaScript apps, often used with React for managing complex application states.",
        "localstorage" => "LocalStorage is a web API that allows you to store key-value pairs in the browser persistently, even after the page is refreshed.",
        "sessionstorage" => "SessionStorage is similar to LocalStorage but its data is cleared when the browser tab is closed.",
        "html" => "HTML (HyperText Markup Language) is the standard markup language used to create the structure of web pages.",
        "css" => "CSS (Cascading Style Sheets) is a style sheet language used to describe the appearance and formatting of a document written in HTML.",
        "npm" => "NPM (Node Package Manager) is the default package manager for Node.js, used to install and manage JavaScript packages.",
        "git" => "Git is a distributed version control system used to track changes in source code during software development.",
        "github" => "GitHub is a cloud-based platform for hosting and managing Git repositories, with additional collaboration features like pull requests and issues.",
        "firebase" => "Firebase is a platform by Google that provides backend services such as authentication, database, storage, and analytics for web and mobile apps.",
        _ => return None,
    };
    Some(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_terms_resolve() {
        assert!(lookup("react").is_some());
        assert!(lookup("cloud computing").is_some());
        assert_eq!(lookup("ai"), lookup("artificial intelligence"));
    }

    #[test]
    fn test_unknown_terms_miss() {
        assert!(lookup("quantum basket weaving").is_none());
        assert!(lookup("").is_none());
    }
}
