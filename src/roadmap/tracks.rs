//! Curricula for every skill track.

use super::curriculum::{CurriculumSection, Tier, Track};

use Tier::{Advanced, Basic, Intermediate};

const fn section(tier: Tier, title: &'static str, topics: &'static [&'static str]) -> CurriculumSection {
    CurriculumSection { tier, title, topics }
}

pub static TRACKS: &[Track] = &[AWS, JAVA, DOTNET, DATA_SCIENCE];

pub fn find_track(slug: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|t| t.slug == slug)
}

pub const AWS: Track = Track {
    slug: "aws",
    title: "AWS Cloud Computing",
    blurb: "Cloud fundamentals, core AWS services, architecture and DevOps.",
    summary: "A comprehensive learning path from cloud fundamentals to advanced AWS architecture and specialized services.",
    closing: "🚀 Complete your AWS cloud journey",
    sections: &[
        section(Basic, "The Foundation", &[
            "Cloud Computing: Definition, benefits, and pay-as-you-go pricing model",
            "Deployment Models: Public, Private, Hybrid, and Multi-Cloud",
            "Service Models: IaaS (EC2, VPC, S3), PaaS (Elastic Beanstalk, RDS), SaaS (WorkMail, Chime)",
            "The Shared Responsibility Model: Security of the Cloud vs. Security in the Cloud",
            "Basic Economics: CAPEX vs. OPEX, Total Cost of Ownership (TCO)",
            "Essential Tools: AWS Management Console, AWS CLI, SDKs",
            "Core AWS Services: EC2, S3, VPC, IAM, RDS",
            "Hands-on Practice: Launching an EC2 instance, creating an S3 bucket, setting up a VPC, configuring IAM users, and creating an RDS database",
        ]),
        section(Basic, "Core Cloud Concepts", &[
            "What is Cloud Computing?: Differences from traditional IT infrastructure",
            "Types of Cloud Services: IaaS, PaaS, SaaS",
            "Key Terminology: Regions, Availability Zones, Edge Locations",
            "Networking Basics: VPC, Subnets, Route Tables, Internet Gateway, NAT Gateway",
            "Security Basics: IAM, Security Groups, Network ACLs",
            "Storage Basics: S3, EBS, EFS, Storage Gateway",
            "Compute Basics: EC2, Lambda, Elastic Beanstalk",
            "Database Basics: RDS, DynamoDB, Redshift",
            "Implementation: AWS Free Tier for hands-on practice",
        ]),
        section(Intermediate, "Advanced Cloud Services", &[
            "High Availability & Fault Tolerance: Multi-AZ deployments, Auto Scaling, Load Balancers (ELB/ALB)",
            "Scalability & Elasticity: Vertical vs. Horizontal scaling, Auto Scaling Groups",
            "Core Networking: Subnets, Route Tables, Security Groups, NACLs, VPNs, Direct Connect",
            "Advanced Security: Encryption (KMS), IAM Roles, Policies, AssumeRole, AWS Organizations",
            "Serverless Architecture: AWS Lambda, API Gateway, DynamoDB, Step Functions",
            "Containers: Amazon ECS, EKS, and Fargate",
            "Message Queues: SQS, SNS",
            "Advanced Databases: Aurora, DynamoDB Streams, DAX, ElastiCache",
        ]),
        section(Intermediate, "Cloud Architecture & DevOps", &[
            "Advanced Validation Techniques: Multi-AZ deployments, Blue/Green deployments",
            "Infrastructure as Code (IaC): AWS CloudFormation, Terraform",
            "CI/CD Pipelines: AWS CodePipeline, CodeBuild, CodeDeploy, GitHub Actions",
            "Monitoring & Logging: CloudWatch, CloudTrail, AWS Config",
            "Cost Optimization: Reserved Instances, Spot Instances, Savings Plans",
            "Disaster Recovery: Backup strategies, Pilot Light, Warm Standby, Multi-Site Active-Active",
            "Microservices Architecture: Designing and deploying microservices using ECS, Lambda, API Gateway",
            "Implementation: Building a full-stack application using multiple AWS services",
        ]),
        section(Advanced, "Cloud Solutions Architecture", &[
            "Advanced Design Patterns: Event-driven architecture, Microservices, Data Lakes, Disaster Recovery strategies",
            "Well-Architected Framework: Operational Excellence, Security, Reliability, Performance Efficiency, Cost Optimization",
            "Multi-account Strategies: AWS Organizations, Service Control Policies (SCPs), Consolidated Billing",
            "Advanced Networking: Transit Gateway, PrivateLink, Direct Connect, VPN CloudHub",
            "Hybrid Cloud: AWS Outposts, Storage Gateway, DataSync",
            "Serverless at Scale: Optimizing Lambda functions, Step Functions, EventBridge",
            "Big Data & Analytics: EMR, Athena, Redshift, Kinesis, Glue, QuickSight",
            "Machine Learning: SageMaker, Rekognition, Lex, Polly, Comprehend",
        ]),
        section(Advanced, "DevOps, Security & Specializations", &[
            "Advanced CI/CD: Blue/Green Deployments, Canary Deployments, Infrastructure Testing",
            "Configuration Management: Ansible, Chef, Puppet",
            "Observability: CloudWatch Logs Insights, X-Ray, Prometheus, Grafana",
            "Security: Zero-Trust Networks, AWS Network Firewall, GuardDuty, Inspector, Macie",
            "Compliance & Governance: AWS Config, AWS Artifact, AWS Control Tower, AWS Security Hub",
            "Penetration Testing: Ethical hacking in the cloud (with AWS approval)",
            "Data & Machine Learning: Building, training, and deploying ML models using SageMaker",
            "MLOps: Model deployment, management, and monitoring using SageMaker, MLflow, Kubeflow",
            "Cloud-Native Development: Developing and deploying cloud-native applications using containers and serverless",
        ]),
        section(Advanced, "Advanced Cloud Topics & Specializations", &[
            "Generative AI: Using AWS services like Bedrock, SageMaker JumpStart for generative AI models",
            "Advanced Analytics: Real-time analytics with Kinesis, batch processing with Glue, data lakes with Lake Formation",
            "IoT: AWS IoT Core, IoT Greengrass, IoT Analytics",
            "Edge Computing: AWS Local Zones, Wavelength, Outposts",
            "Blockchain: Amazon Managed Blockchain, Quantum Ledger Database (QLDB)",
            "Robotics: AWS RoboMaker",
            "Space: AWS Ground Station",
            "Advanced Certifications: AWS Solutions Architect Professional, DevOps Engineer Professional, Security Specialty",
            "Reading Research Papers: AWS Whitepapers, re:Invent sessions, AWS Blogs",
            "Contributing to Open Source: AWS CDK, AWS SAM, Open-Source AWS tools",
            "Specializations: Security, Networking, Data Analytics, Machine Learning, DevOps",
        ]),
    ],
};

pub const JAVA: Track = Track {
    slug: "java",
    title: "Full Stack Java Development",
    blurb: "Core Java, OOP and collections through Spring Boot microservices.",
    summary: "A comprehensive learning path from Java basics to advanced Spring Boot microservices development.",
    closing: "🚀 Complete your Java development journey",
    sections: &[
        section(Basic, "Introduction", &["Java Intro", "Java Get Started", "Java Syntax", "Java Output", "Java Comments"]),
        section(Basic, "Variables & Data Types", &["Java Variables", "Java Data Types", "Java Type Casting"]),
        section(Basic, "Operators & Strings", &["Java Operators", "Java Strings", "Java Math", "Java Booleans"]),
        section(Basic, "Control Flow", &["Java Conditions (if-else)", "Java Switch", "Java While Loop", "Java For Loop", "Java Break/Continue"]),
        section(Basic, "Arrays & Methods", &["Java Arrays", "Java Methods", "Java Method Parameters", "Java Method Overloading", "Java Scope", "Java Recursion"]),
        section(Intermediate, "Object-Oriented Programming", &[
            "Java OOP Concepts", "Java Classes/Objects", "Java Class Attributes & Methods", "Java Constructors",
            "Java this Keyword", "Java Modifiers", "Java Encapsulation", "Java Packages / API", "Java Inheritance",
            "Java Polymorphism", "Java super Keyword", "Java Inner Classes", "Java Abstraction", "Java Interface", "Java Enums",
        ]),
        section(Intermediate, "Error Handling", &["Java Errors", "Java Debugging", "Exceptions (try-catch-finally, throw, throws)"]),
        section(Intermediate, "File Handling", &["Java Files", "Java Create/Write Files", "Java Read Files", "Java Delete Files"]),
        section(Intermediate, "Data Structures & Collections", &[
            "Java Data Structures", "Java Collections Framework", "Java List / ArrayList / LinkedList", "Java List Sorting",
            "Java Set / HashSet / TreeSet / LinkedHashSet", "Java Map / HashMap / TreeMap / LinkedHashMap", "Java Iterator",
        ]),
        section(Intermediate, "Advanced Java Concepts", &[
            "Java Wrapper Classes", "Java Generics", "Java Annotations", "Java Threads (Multithreading)",
            "Java RegEx", "Java Lambda Expressions", "Java Advanced Sorting",
        ]),
        section(Advanced, "Spring Boot Introduction", &["Introduction", "Spring vs Spring Boot", "Spring MVC vs Spring Boot"]),
        section(Advanced, "Spring Core Concepts", &[
            "Inversion of Control", "Dependency Injection", "BeanFactory vs. ApplicationContext", "Spring Bean Lifecycle",
            "Singleton, Prototype Scope", "Custom Scope", "Create a Spring Bean", "Spring Autowiring", "DispatcherServlet",
            "Spring IoC Container", "Maven/Gradle", "Spring Boot Core Features",
        ]),
        section(Advanced, "Architecture & Configuration", &[
            "Annotations", "Auto-configuration", "Spring Boot Starters", "Create a basic application", "Best Practices",
            "Application Properties", "YAML Configuration", "Actuator", "Logging", "DevTools",
        ]),
        section(Advanced, "REST API with Spring Boot", &[
            "@RestController", "@RequestMapping", "@GetMapping & @PostMapping", "@PutMapping & @DeleteMapping",
            "@PathVariable & @RequestParam", "@RequestBody", "REST API JSON Serialization/Deserialization",
            "Exception Handling", "Validation",
        ]),
        section(Advanced, "Database & JPA Integration", &[
            "Integrating with MySQL", "PostgreSQL", "MongoDB", "Spring Data JPA", "Hibernate Basics", "JDBC",
            "CrudRepository vs. JpaRepository", "H2 Database for Testing", "CRUD Operations with JPA Repositories",
        ]),
        section(Advanced, "Advanced Spring Boot Features", &[
            "Scheduling Tasks", "Sending Emails", "File Handling & Uploading Files", "Caching",
            "Caching with other Providers", "Transaction Management", "DTO Mapping",
        ]),
        section(Advanced, "Microservices with Spring Boot", &[
            "Introduction", "Communication Between Spring Microservices", "Deploy Java Microservices on AWS Elastic Beanstalk",
        ]),
        section(Advanced, "Spring Boot Testing", &[
            "Unit Testing with JUnit", "Testing with Mockito", "Integration Testing with MockMVC", "Using ZeroCode for Testing",
        ]),
    ],
};

pub const DOTNET: Track = Track {
    slug: "dotnet",
    title: "Full Stack Development – .NET",
    blurb: "C# and .NET through ASP.NET Core, EF Core, microservices and cloud.",
    summary: "From C# fundamentals to modern ASP.NET Core, EF Core, microservices, and cloud deployment.",
    closing: "🚀 Build production-grade .NET apps",
    sections: &[
        section(Basic, "C# Fundamentals", &["Syntax", "Types", "Variables", "Operators", "Control Flow", "Methods"]),
        section(Basic, "OOP in C#", &["Classes & Objects", "Constructors", "Encapsulation", "Inheritance", "Polymorphism", "Interfaces", "Abstract Classes"]),
        section(Basic, ".NET Basics", &["CLR / BCL", ".NET CLI", "NuGet", "Project Structure", "Debugging"]),
        section(Basic, "Collections & LINQ", &["List/Dictionary/HashSet", "LINQ Queries", "Deferred Execution", "Lambdas"]),
        section(Intermediate, "ASP.NET Core MVC", &["Controllers", "Views/Razor", "Routing", "Model Binding", "Validation"]),
        section(Intermediate, "ASP.NET Core Web API", &["REST Principles", "DTOs", "FluentValidation", "Filters", "Versioning"]),
        section(Intermediate, "Entity Framework Core", &["DbContext", "Migrations", "Relationships", "LINQ-to-Entities", "Tracking", "Queries"]),
        section(Intermediate, "Configuration & DI", &["Options Pattern", "IOptions", "IConfiguration", "Dependency Injection"]),
        section(Intermediate, "Authentication & Authorization", &["Identity", "JWT", "Cookies", "Policies", "Roles"]),
        section(Advanced, "Clean Architecture", &["Domain Layer", "Application Layer", "Infrastructure", "Presentation", "CQRS"]),
        section(Advanced, "Testing & Quality", &["xUnit", "Moq", "Integration Tests", "Testcontainers", "Performance Profiling"]),
        section(Advanced, "Microservices", &["APIs Gateway", "Service Discovery", "gRPC", "Resilience (Polly)", "Messaging (RabbitMQ/Kafka)"]),
        section(Advanced, "Cloud & DevOps", &["Azure Basics", "Docker", "Kubernetes", "CI/CD", "Observability (Serilog, OpenTelemetry)"]),
    ],
};

pub const DATA_SCIENCE: Track = Track {
    slug: "data-science",
    title: "Data Science",
    blurb: "Statistics, SQL and Python through modeling, experimentation and MLOps.",
    summary: "From statistics and SQL to machine learning, experimentation, and business impact.",
    closing: "🚀 Become a data scientist",
    sections: &[
        section(Basic, "Python & Ecosystem", &["Syntax", "Data structures", "Pandas", "NumPy", "Matplotlib", "Seaborn", "Jupyter"]),
        section(Basic, "Statistics & Probability", &["Descriptive stats", "Distributions", "Sampling", "Hypothesis testing", "Confidence intervals"]),
        section(Basic, "SQL & Data Access", &["SELECT/WHERE/JOIN", "Aggregations", "Window functions", "Indexes", "Query optimization basics"]),
        section(Basic, "EDA & Cleaning", &["Missing data", "Outliers", "Data types", "Feature scaling", "Encoding categoricals"]),
        section(Basic, "Intro ML for DS", &["Regression", "Classification", "Clustering", "Train/Test split", "Cross-validation", "Metrics"]),
        section(Intermediate, "Feature Engineering", &["Text/date/geo features", "Target encoding", "Pipelines"]),
        section(Intermediate, "Time Series", &["Stationarity", "ARIMA/SARIMA", "Exponential smoothing", "Feature lags"]),
        section(Intermediate, "Visualization", &["Storytelling", "Seaborn advanced", "Plotly/Altair", "Dashboards (Streamlit)"]),
        section(Intermediate, "Modeling Toolkit", &["Tree models", "Ensembles", "SVM", "Naive Bayes", "Hyperparameter tuning"]),
        section(Intermediate, "Data at Scale", &["Spark basics", "Dask/Polars", "Parquet/Arrow", "ETL basics"]),
        section(Advanced, "NLP & CV for DS", &["Tokenization", "Embeddings", "Transformers for DS", "Classical CV", "Transfer learning"]),
        section(Advanced, "Causal Inference & Experimentation", &["AB testing", "Uplift modeling", "DoWhy intro", "Bias/variance in experiments"]),
        section(Advanced, "MLOps for DS", &["Tracking (MLflow)", "Model registry", "Batch vs real-time scoring", "Docker", "Deployment options"]),
        section(Advanced, "Business Impact", &["KPIs & metrics", "Dashboards", "Communication", "Presentations", "Stakeholder management"]),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_counts() {
        assert_eq!(AWS.sections.len(), 7);
        assert_eq!(JAVA.sections.len(), 18);
        assert_eq!(DOTNET.sections.len(), 13);
        assert_eq!(DATA_SCIENCE.sections.len(), 14);
    }

    #[test]
    fn slugs_are_unique_and_findable() {
        let slugs: HashSet<_> = TRACKS.iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), TRACKS.len());
        for track in TRACKS {
            assert_eq!(find_track(track.slug), Some(track));
        }
        assert_eq!(find_track("cobol"), None);
    }

    #[test]
    fn tiers_never_go_backwards() {
        let rank = |t: Tier| match t {
            Basic => 0,
            Intermediate => 1,
            Advanced => 2,
        };
        for track in TRACKS {
            for pair in track.sections.windows(2) {
                assert!(rank(pair[0].tier) <= rank(pair[1].tier), "{}: {}", track.slug, pair[1].title);
            }
            assert!(track.sections.iter().all(|s| !s.topics.is_empty()));
        }
    }
}
